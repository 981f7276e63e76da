//! Static stylesheet and scripts inlined into every report.

/// Stylesheet shared by both report styles.
pub const CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f9fafb; color: #334155; line-height: 1.65; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem; }

/* Header */
.header-accent { height: 3px; background: linear-gradient(90deg, #3b82f6, #8b5cf6, #ec4899); border-radius: 12px 12px 0 0; }
header { background: linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #1e3a5f 100%); color: #fff; padding: 2.5rem 2.5rem 2rem; margin-bottom: 2rem; border-radius: 12px; }
header a { color: rgba(255,255,255,0.8); }
.header-inner { display: flex; align-items: center; gap: 2rem; flex-wrap: wrap; }
.header-info { flex: 1; min-width: 200px; }
.header-info h1 { font-size: 2rem; font-weight: 800; letter-spacing: -0.02em; margin-bottom: 0.25rem; }
.header-meta { opacity: 0.7; font-size: 0.85rem; margin-bottom: 1rem; }
.header-stats { display: flex; gap: 2rem; flex-wrap: wrap; }
.header-stat { text-align: center; }
.stat-value { font-size: 1.5rem; font-weight: 700; display: block; }
.stat-label { font-size: 0.75rem; opacity: 0.6; text-transform: uppercase; letter-spacing: 0.05em; }
@keyframes gauge-fill { from { stroke-dashoffset: var(--gauge-circumference); } }
.gauge-arc { animation: gauge-fill 1.2s ease-out forwards; }

/* Sections */
.section-card, .page-section, .chart-card { background: #fff; border-radius: 12px; border: 1px solid #e5e7eb; box-shadow: 0 1px 2px rgba(0,0,0,0.04), 0 4px 16px rgba(0,0,0,0.04); }
.section-card, .page-section { padding: 2rem; margin-bottom: 1.5rem; }
.section-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
.executive-summary { border-left: 4px solid #3b82f6; }
.executive-summary p { color: #475569; white-space: pre-line; }
.muted { color: #6b7280; font-size: 0.9rem; }

/* Analytics */
.analytics-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 1.5rem; }
.chart-card { padding: 1.5rem; }
.chart-card h3 { font-size: 1rem; font-weight: 600; margin-bottom: 0.25rem; }
.chart-subtitle { font-size: 0.8rem; color: #6b7280; margin-bottom: 1rem; }
.chart-wrapper { position: relative; height: 240px; }
.donut-wrapper { display: flex; align-items: center; justify-content: center; gap: 1.5rem; min-height: 180px; }
.donut-legend { display: flex; flex-direction: column; gap: 0.35rem; font-size: 0.85rem; }
.legend-row { display: flex; align-items: center; gap: 0.5rem; }
.legend-swatch { width: 10px; height: 10px; border-radius: 2px; display: inline-block; }
.legend-count { margin-left: auto; padding-left: 1rem; font-weight: 700; }
.data-table { width: 100%; border-collapse: collapse; font-size: 0.85rem; }
.data-table th { text-align: left; font-weight: 600; color: #6b7280; padding: 0.35rem 0.5rem; border-bottom: 1px solid #e5e7eb; }
.data-table td { padding: 0.4rem 0.5rem; border-bottom: 1px solid #f3f4f6; vertical-align: middle; }
.data-table .num { text-align: right; font-weight: 700; white-space: nowrap; }
.table-bar { height: 8px; border-radius: 4px; background: #f3f4f6; overflow: hidden; min-width: 80px; }
.table-bar span { display: block; height: 100%; border-radius: 4px; }

/* Findings */
.finding-card, .finding-item, .action-item { border-radius: 10px; border: 1px solid #e5e7eb; border-left: 4px solid #6b7280; }
.finding-card { padding: 1.25rem 1.25rem 1.25rem 1.5rem; margin-bottom: 0.75rem; }
.finding-header, .finding-item-header { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; flex-wrap: wrap; }
.finding-description { color: #475569; font-size: 0.9rem; }
.priority-badge { color: #fff; padding: 2px 10px; border-radius: 4px; font-size: 0.75rem; font-weight: 600; white-space: nowrap; }
.badge-end { margin-left: auto; }
.affected-pages { font-size: 0.8rem; color: #6b7280; margin-left: auto; }
.findings-list { display: flex; flex-direction: column; gap: 0.75rem; }
.finding-item { padding: 1.25rem; }
.finding-criterion { font-weight: 600; font-size: 0.95rem; }
.finding-lens { font-size: 0.85rem; color: #6b7280; }
.finding-score-wrap { display: inline-flex; align-items: center; gap: 6px; }
.finding-score-num { font-weight: 700; font-size: 0.85rem; min-width: 20px; }
.finding-issue { color: #475569; font-size: 0.9rem; margin-bottom: 0.5rem; }
.finding-rec { background: #f8fafc; border-radius: 6px; padding: 0.75rem 1rem; font-size: 0.85rem; border: 1px solid #f1f5f9; }
.finding-rec strong { color: #1e293b; }

/* Page navigation */
.page-nav { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 1.5rem; position: sticky; top: 0; background: rgba(249,250,251,0.85); backdrop-filter: blur(12px); padding: 0.75rem 0; z-index: 10; border-bottom: 1px solid #e5e7eb; }
.page-nav-link { display: inline-flex; align-items: center; gap: 0.4rem; padding: 0.4rem 0.9rem; background: #fff; border-radius: 8px; text-decoration: none; color: #334155; font-weight: 500; font-size: 0.85rem; border: 1px solid #e5e7eb; }
.page-nav-link:hover, .page-nav-link.active { border-color: #3b82f6; box-shadow: 0 0 0 1px #3b82f6; }
.nav-score { font-size: 0.8rem; font-weight: 700; }

/* Page sections */
.page-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
.page-header h2 { font-size: 1.4rem; font-weight: 700; }
.page-url { margin-bottom: 1.5rem; }
.page-url a { color: #3b82f6; text-decoration: none; font-size: 0.85rem; word-break: break-all; }
.screenshot-tabs { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.screenshot-tab { padding: 0.35rem 1rem; border-radius: 6px; border: 1px solid #e5e7eb; background: #fff; cursor: pointer; font-size: 0.8rem; font-weight: 500; color: #6b7280; }
.screenshot-tab.active { border-color: #3b82f6; color: #3b82f6; background: #eff6ff; }
.screenshot-panel { display: none; }
.screenshot-panel.active { display: block; }
.device-frame { border-radius: 10px; overflow: hidden; border: 1px solid #e5e7eb; box-shadow: 0 2px 8px rgba(0,0,0,0.06); }
.device-chrome { background: #f3f4f6; padding: 8px 12px; display: flex; align-items: center; gap: 6px; }
.device-dot { width: 8px; height: 8px; border-radius: 50%; }
.device-dot.red { background: #ef4444; }
.device-dot.yellow { background: #f59e0b; }
.device-dot.green { background: #22c55e; }
.device-frame img { width: 100%; display: block; }
.device-frame.mobile { max-width: 280px; margin: 0 auto; border-radius: 20px; border: 3px solid #d1d5db; }
.device-frame.mobile .device-chrome { justify-content: center; padding: 6px; }
.device-frame.mobile .device-chrome::after { content: ''; width: 40px; height: 4px; border-radius: 2px; background: #d1d5db; }

/* Action plan */
.action-section-title { font-size: 1.1rem; font-weight: 600; margin: 1.5rem 0 0.75rem; }
.action-section-title:first-of-type { margin-top: 0; }
.action-hint { font-size: 0.8rem; font-weight: 400; color: #6b7280; }
.action-list { display: flex; flex-direction: column; gap: 0.75rem; }
.action-item { padding: 1rem 1.25rem; display: flex; flex-wrap: wrap; align-items: baseline; gap: 0.5rem; }
.action-text { flex: 1; min-width: 200px; font-size: 0.9rem; }
.action-page { font-size: 0.8rem; color: #6b7280; }
.action-tag { padding: 2px 8px; border-radius: 4px; font-size: 0.7rem; font-weight: 600; text-transform: uppercase; }
.tag-good { background: #dcfce7; color: #166534; }
.tag-fair { background: #fef9c3; color: #854d0e; }
.tag-poor { background: #f3f4f6; color: #4b5563; }

footer { text-align: center; color: #94a3b8; font-size: 0.8rem; padding: 2rem 0; }
footer p { margin-bottom: 0.25rem; }
@keyframes fade-up { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); } }
.animate-in { animation: fade-up 0.4s ease-out both; }

@media (max-width: 768px) {
    .container { padding: 1rem; }
    header { padding: 1.5rem; }
    .header-inner { flex-direction: column; text-align: center; }
    .header-stats { justify-content: center; }
    .analytics-grid { grid-template-columns: 1fr; }
    .page-header { flex-direction: column; gap: 0.75rem; align-items: flex-start; }
}
"#;

/// Screenshot tabs and navigation highlighting.
pub const NAV_SCRIPT: &str = r#"
function switchScreenshot(btn, panelId) {
    const section = btn.closest('.page-section');
    section.querySelectorAll('.screenshot-tab').forEach(t => t.classList.remove('active'));
    section.querySelectorAll('.screenshot-panel').forEach(p => p.classList.remove('active'));
    btn.classList.add('active');
    document.getElementById(panelId).classList.add('active');
}

document.addEventListener('DOMContentLoaded', function () {
    const nav = document.querySelector('.page-nav');
    const sections = document.querySelectorAll('.page-section');
    if (!nav || !sections.length || typeof IntersectionObserver === 'undefined') return;
    const links = nav.querySelectorAll('.page-nav-link');
    const observer = new IntersectionObserver(entries => {
        entries.forEach(entry => {
            if (!entry.isIntersecting) return;
            links.forEach(l => l.classList.remove('active'));
            const active = nav.querySelector('[data-target="' + entry.target.id + '"]');
            if (active) active.classList.add('active');
        });
    }, { rootMargin: '-20% 0px -70% 0px' });
    sections.forEach(s => observer.observe(s));
});
"#;

/// Chart.js initialisation; reads its data from the `report_data` element.
pub const CHART_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
    const source = document.getElementById('report_data');
    if (!source || typeof Chart === 'undefined') return;
    const data = JSON.parse(source.textContent);

    Chart.defaults.font.family = "'Inter', -apple-system, BlinkMacSystemFont, sans-serif";
    Chart.defaults.font.size = 12;
    Chart.defaults.color = '#6b7280';

    new Chart(document.getElementById('chartPageScores'), {
        type: 'bar',
        data: {
            labels: data.pageLabels,
            datasets: [{ data: data.pageScores, backgroundColor: data.pageColors, borderRadius: 6, barThickness: 28 }]
        },
        options: {
            indexAxis: 'y',
            responsive: true,
            maintainAspectRatio: false,
            plugins: { legend: { display: false }, tooltip: { callbacks: { label: ctx => ctx.raw.toFixed(1) + '/5' } } },
            scales: { x: { min: 0, max: 5, grid: { color: '#f3f4f6' }, ticks: { stepSize: 1 } }, y: { grid: { display: false } } }
        }
    });

    new Chart(document.getElementById('chartLensRadar'), {
        type: 'radar',
        data: {
            labels: data.lensLabels,
            datasets: [{ data: data.lensValues, backgroundColor: 'rgba(59,130,246,0.15)', borderColor: '#3b82f6', pointBackgroundColor: '#3b82f6', pointRadius: 4, borderWidth: 2 }]
        },
        options: {
            responsive: true,
            maintainAspectRatio: false,
            plugins: { legend: { display: false } },
            scales: { r: { min: 0, max: 5, ticks: { stepSize: 1, backdropColor: 'transparent' }, grid: { color: '#e5e7eb' } } }
        }
    });

    new Chart(document.getElementById('chartScoreDist'), {
        type: 'bar',
        data: {
            labels: data.scoreLabels,
            datasets: [{ data: data.scoreCounts, backgroundColor: data.scoreColors, borderRadius: 6, barThickness: 36 }]
        },
        options: {
            responsive: true,
            maintainAspectRatio: false,
            plugins: { legend: { display: false } },
            scales: { y: { beginAtZero: true, ticks: { stepSize: 1 }, grid: { color: '#f3f4f6' } }, x: { grid: { display: false } } }
        }
    });
});
"#;
