//! Global CSS styles for the portfolio.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink: #0b0b0b;
  --ink-lighter: #141414;
  --ink-border: #262626;

  /* FOREST (Brand, Gradients) */
  --forest-deep: #14331f;
  --forest: #1f5231;
  --forest-bright: #4ade80;

  /* ACCENT */
  --accent-pink: #ec4899;
  --accent-pink-soft: rgba(236, 72, 153, 0.35);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SURFACES */
  --card-bg: #ffffff;
  --card-text: #111111;
  --overlay: rgba(0, 0, 0, 0.8);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;
  --font-serif: 'Playfair Display', Georgia, serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

.page {
  min-height: 100vh;
  padding-top: 4.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  text-align: center;
  margin-bottom: 2rem;
}

/* === Navigation Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  background: var(--ink);
  border-bottom: 1px solid var(--ink-border);
}

.nav-header__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-brand {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

/* === Mobile Navigation === */
.mobile-nav {
  display: none;
  position: fixed;
  bottom: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  background: var(--ink-lighter);
  border-top: 1px solid var(--ink-border);
  padding: 0.4rem 0;
  justify-content: space-around;
}

.mobile-nav-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.15rem;
  color: var(--text-muted);
  text-decoration: none;
  font-size: 0.7rem;
}

.mobile-nav-item.active {
  color: var(--accent-pink);
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .mobile-nav { display: flex; }
  .page { padding-bottom: 4rem; }
}

/* === Buttons === */
.btn-primary {
  display: inline-block;
  background: linear-gradient(90deg, var(--forest-bright), var(--accent-pink));
  color: #ffffff;
  border: none;
  border-radius: 9999px;
  padding: 0.75rem 2rem;
  font-size: 1.1rem;
  font-weight: 600;
  cursor: pointer;
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.4);
  transition: transform var(--transition-normal);
}

.btn-primary:hover {
  transform: scale(1.05);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: default;
  transform: none;
}

/* === Home === */
.home-hero {
  min-height: calc(100vh - 4.5rem);
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 1.5rem;
}

.home-hero__inner {
  max-width: 48rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 3.25rem;
  line-height: 1.2;
  margin-bottom: 1.5rem;
  text-shadow: 0 2px 12px rgba(0, 0, 0, 0.6);
}

.hero-tagline {
  font-size: 1.2rem;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.hero-name {
  color: var(--accent-pink);
  font-weight: 600;
}

/* === Gallery === */
.gallery-main {
  max-width: 72rem;
  margin: 0 auto;
  padding: 2.5rem 1rem 4rem;
}

.category-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 2.5rem;
}

.pill {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--text-muted);
  border-radius: 9999px;
  padding: 0.5rem 1.5rem;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-fast);
}

.pill:hover {
  transform: scale(1.05);
  border-color: var(--text-primary);
}

.pill.selected {
  border-color: var(--accent-pink);
  color: var(--accent-pink);
  box-shadow: 0 0 12px var(--accent-pink-soft);
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 2rem;
}

.gallery-card {
  position: relative;
  overflow: hidden;
  border-radius: 0.5rem;
  background: var(--ink-lighter);
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.5);
  cursor: pointer;
  transition: box-shadow var(--transition-normal);
}

.gallery-card:hover {
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.7);
}

.gallery-card__media {
  display: block;
  width: 100%;
  height: 16rem;
  object-fit: cover;
  border: none;
}

.gallery-card__loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  width: 100%;
  height: 16rem;
  color: var(--text-muted);
  font-size: 0.85rem;
}

.gallery-card__caption {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  background: rgba(0, 0, 0, 0.6);
  text-align: center;
  padding: 0.5rem;
}

.gallery-card__title {
  font-size: 1.05rem;
  font-weight: 600;
}

.gallery-card__category {
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.gallery-empty {
  text-align: center;
  color: var(--text-muted);
  padding: 4rem 0;
}

.gallery-settling {
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
  margin-top: 1.5rem;
}

/* === Loading === */
.loading-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 0;
  color: var(--text-muted);
}

.loading-spinner {
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--ink-border);
  border-top-color: var(--accent-pink);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.lightbox-content {
  max-width: 90vw;
  max-height: 90vh;
}

.lightbox__media {
  max-width: 90vw;
  max-height: 90vh;
  border-radius: 0.5rem;
  box-shadow: 0 12px 48px rgba(0, 0, 0, 0.8);
}

.lightbox__media--frame {
  width: 80vw;
  height: 80vh;
  border: none;
}

/* === About === */
.about-main {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 3rem 1rem;
}

.about-card {
  max-width: 52rem;
  width: 100%;
  background: rgba(255, 255, 255, 0.06);
  border: 1px solid rgba(255, 255, 255, 0.15);
  border-radius: 0.75rem;
  padding: 2.5rem;
  text-align: center;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
}

.about-prose {
  font-size: 1.1rem;
  color: var(--text-secondary);
}

.about-prose--bio {
  margin-top: 1rem;
}

.about-name {
  color: var(--forest-bright);
  font-weight: 600;
}

.about-avatar {
  margin-top: 2.5rem;
}

.about-avatar__img {
  width: 12rem;
  height: 12rem;
  object-fit: cover;
  border-radius: 50%;
  border: 4px solid var(--forest-bright);
  box-shadow: 0 4px 18px rgba(0, 0, 0, 0.6);
}

.about-avatar__caption {
  margin-top: 1rem;
  font-size: 0.9rem;
  font-style: italic;
  color: var(--text-muted);
}

/* === Contact === */
.contact-main {
  max-width: 40rem;
  margin: 0 auto;
  padding: 3rem 1rem;
}

.contact-lead {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: 2.5rem;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.contact-label {
  font-size: 0.85rem;
  color: var(--text-secondary);
  margin-top: 1rem;
}

.contact-input {
  width: 100%;
  padding: 0.75rem 1rem;
  background: var(--ink-lighter);
  color: var(--text-primary);
  border: 1px solid var(--ink-border);
  border-radius: 0.5rem;
  font-size: 1rem;
  font-family: inherit;
}

.contact-input:focus {
  outline: none;
  border-color: var(--forest-bright);
}

.contact-textarea {
  resize: vertical;
}

.contact-form .btn-primary {
  margin-top: 1.5rem;
  align-self: center;
}

.contact-ack {
  text-align: center;
  margin-top: 1rem;
  color: var(--forest-bright);
}
"#;
