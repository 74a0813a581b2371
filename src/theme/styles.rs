//! Global CSS styles for CanIFly.
//!
//! Dark dashboard palette. Class names are shared with `canifly-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-base: #0d1117;
  --bg-raised: #161b22;
  --bg-sunken: #0a0d12;
  --border: #30363d;

  /* Text */
  --text-primary: #e6edf3;
  --text-secondary: rgba(230, 237, 243, 0.7);
  --text-muted: rgba(230, 237, 243, 0.45);

  /* Accents */
  --accent: #58a6ff;
  --accent-glow: rgba(88, 166, 255, 0.25);
  --omega: #d4af37;
  --alpha: #8b949e;

  /* Semantic */
  --success: #3fb950;
  --warning: #d29922;
  --danger: #f85149;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--bg-base);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.5;
}

/* === Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.app-nav {
  display: flex;
  gap: 1.5rem;
  align-items: center;
  padding: 0.75rem 1.5rem;
  border-bottom: 1px solid var(--border);
  background: var(--bg-raised);
}

.app-nav__brand {
  font-weight: 600;
  color: var(--accent);
  margin-right: auto;
}

.app-nav a {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: var(--text-sm);
}

.app-nav a.active,
.app-nav a:hover {
  color: var(--text-primary);
}

.app-main {
  flex: 1;
  padding: 1.5rem;
}

.page-title {
  font-size: var(--text-xl);
  margin-bottom: 1rem;
}

.empty-state {
  color: var(--text-muted);
  font-style: italic;
  padding: 2rem 0;
}

/* === Buttons === */
.btn-primary, .btn-danger, .btn-ghost, .btn-badge, .icon-btn {
  font-family: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  border-radius: 4px;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: var(--bg-base);
  border: none;
  padding: 0.4rem 0.9rem;
}

.btn-danger {
  background: transparent;
  color: var(--danger);
  border: 1px solid var(--danger);
  padding: 0.4rem 0.9rem;
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid var(--border);
  padding: 0.4rem 0.9rem;
}

.btn-badge {
  border: 1px solid currentColor;
  background: transparent;
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  padding: 0.2rem 0.4rem;
}

.icon-btn:hover {
  color: var(--text-primary);
  background: var(--accent-glow);
}

.icon-btn.danger:hover {
  color: var(--danger);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Account Cards === */
.account-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1rem;
}

.account-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 1rem;
}

.account-card__header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.account-card__name {
  font-size: var(--text-lg);
  flex: 1;
}

.account-card__rename {
  flex: 1;
  background: var(--bg-sunken);
  color: var(--text-primary);
  border: 1px solid var(--accent);
  border-radius: 4px;
  padding: 0.25rem 0.5rem;
  font: inherit;
}

.status-omega { color: var(--omega); }
.status-alpha { color: var(--alpha); }
.status-other { color: var(--text-muted); }

.character-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.character-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.4rem 0.5rem;
  background: var(--bg-sunken);
  border-radius: 4px;
}

.character-row__name {
  flex: 1;
}

.character-row__sp {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.character-row select {
  background: var(--bg-raised);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 4px;
  font: inherit;
  font-size: var(--text-xs);
}

.character-row__mct {
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

/* === Skill Plan Table === */
.plan-table {
  width: 100%;
  border-collapse: collapse;
}

.plan-table th {
  text-align: left;
  font-size: var(--text-xs);
  text-transform: uppercase;
  color: var(--text-muted);
  border-bottom: 1px solid var(--border);
  padding: 0.5rem;
}

.plan-table td {
  padding: 0.5rem;
  border-bottom: 1px solid var(--border);
}

.plan-row__name {
  font-weight: 500;
}

.plan-all-qualified .plan-row__name { color: var(--success); }
.plan-in-progress .plan-row__name { color: var(--warning); }
.plan-none-qualified .plan-row__name { color: var(--text-secondary); }

.plan-child td {
  background: var(--bg-sunken);
  font-size: var(--text-sm);
}

.plan-child__name {
  padding-left: 2rem;
}

.status-qualified { color: var(--success); }
.status-pending { color: var(--warning); }
.status-missing { color: var(--danger); }

.plan-child__finish {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

/* === Progress Ring === */
.progress-ring {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
}

.progress-ring__track { stroke: var(--border); }
.progress-ring__fill {
  stroke: var(--accent);
  stroke-linecap: round;
}

.progress-ring__label {
  position: absolute;
  font-size: 0.6rem;
  font-family: var(--font-mono);
}

.skill-progress {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
}

.skill-progress__caption {
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

/* === Skeletons === */
.skeleton-list {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1rem;
}

.skeleton {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.skeleton-row {
  grid-column: 1 / -1;
  flex-direction: row;
  padding: 0.5rem;
}

.skeleton-line {
  height: 0.75rem;
  flex: 1;
  border-radius: 4px;
  background: linear-gradient(90deg, var(--bg-sunken), var(--border), var(--bg-sunken));
  background-size: 200% 100%;
  animation: skeleton-shimmer 1.4s ease-in-out infinite;
}

.skeleton-line--title { height: 1.1rem; max-width: 60%; }
.skeleton-line--short { max-width: 35%; }

@keyframes skeleton-shimmer {
  0% { background-position: 200% 0; }
  100% { background-position: -200% 0; }
}

/* === Error Fallback === */
.error-fallback {
  margin: 3rem auto;
  max-width: 480px;
  text-align: center;
  color: var(--danger);
  border: 1px solid var(--danger);
  border-radius: 8px;
  padding: 2rem;
}

/* === Footer === */
.app-footer {
  padding: 0.75rem 1.5rem;
  border-top: 1px solid var(--border);
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-align: center;
}
"#;
