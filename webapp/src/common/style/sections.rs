pub const SECTION_STYLES: &str = r#"
/* Page sections */
.section {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-4);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-8);
  color: var(--text-primary);
}

/* Reveal on scroll */
.fade-in {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.fade-in.visible {
  opacity: 1;
  transform: none;
}

/* Hero */
.hero {
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  will-change: transform;
}

.hero-content {
  display: grid;
  grid-template-columns: 1fr auto;
  gap: var(--space-12);
  align-items: center;
}

.hero-text h1 {
  font-size: 3rem;
  font-weight: 800;
  line-height: 1.1;
}

.gradient-text {
  background: linear-gradient(135deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.typewriter {
  font-size: 1.5rem;
  color: var(--text-secondary);
  min-height: 2.25rem;
  margin: var(--space-2) 0 var(--space-4);
}

.typewriter::after {
  content: '|';
  margin-left: 2px;
  animation: blink 1s step-end infinite;
}

.hero-text p {
  color: var(--text-secondary);
  margin-bottom: var(--space-3);
}

.cta-buttons {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-6);
  flex-wrap: wrap;
}

.hero-image img {
  width: 280px;
  height: 280px;
  border-radius: var(--radius-full);
  object-fit: cover;
  box-shadow: var(--shadow-lg);
  cursor: zoom-in;
}

.floating {
  animation: floating 3s ease-in-out infinite;
}

@keyframes floating {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-12px); }
}

@keyframes blink {
  50% { opacity: 0; }
}

/* Experience */
.experience-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
}

.experience-item {
  padding: var(--space-6);
  cursor: pointer;
}

.reveal-item {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.reveal-item.visible {
  opacity: 1;
  transform: none;
}

.experience-item img,
.experience-detail img {
  width: 100%;
  border-radius: var(--radius-md);
  margin-bottom: var(--space-4);
}

.entry-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
}

.entry-period {
  font-size: 0.875rem;
  color: var(--text-tertiary);
  margin-bottom: var(--space-3);
}

.entry-more {
  color: var(--primary);
  font-weight: 500;
}

.experience-detail {
  padding: var(--space-8);
}

.experience-detail p {
  color: var(--text-secondary);
  margin-bottom: var(--space-3);
}

.back-btn {
  margin-bottom: var(--space-6);
}

/* Project carousel */
.carousel-container {
  position: relative;
}

.carousel-wrapper {
  overflow: hidden;
  border-radius: var(--radius-lg);
}

.projects-grid {
  display: flex;
  transition: transform 0.5s var(--easing-standard);
}

.card-inline {
  flex: 0 0 100%;
  padding: var(--space-2);
}

.project-card {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
  padding: var(--space-6);
}

.project-image img {
  width: 100%;
  border-radius: var(--radius-md);
  cursor: zoom-in;
}

.project-gallery {
  display: flex;
  gap: var(--space-2);
  margin-top: var(--space-2);
}

.project-gallery img {
  width: 72px;
  height: 54px;
  object-fit: cover;
  border-radius: var(--radius-md);
  cursor: zoom-in;
}

.project-content p {
  color: var(--text-secondary);
  margin-top: var(--space-3);
}

.carousel-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.nav-btn {
  width: 44px;
  height: 44px;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
}

.nav-btn:disabled {
  opacity: 0.4;
  cursor: not-allowed;
}

.pagination {
  display: flex;
  gap: var(--space-2);
}

.pagination-dot {
  width: 10px;
  height: 10px;
  border-radius: var(--radius-full);
  border: none;
  background-color: var(--neutral-300);
  cursor: pointer;
}

.pagination-dot.active {
  background-color: var(--primary);
  transform: scale(1.3);
}

/* Skills */
.skills-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
}

.skill-item {
  padding: var(--space-6);
  text-align: center;
  animation: fade-in var(--transition-slow) var(--easing-standard) both;
  animation-delay: calc(var(--i) * 100ms);
}

.skill-icon {
  font-size: 2rem;
  color: var(--primary);
  margin-bottom: var(--space-3);
}

/* Organizations */
.org-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
}

.org-item {
  padding: var(--space-6);
}

.org-item img {
  width: 100%;
  border-radius: var(--radius-md);
  margin-bottom: var(--space-4);
}

.org-subtitle {
  color: var(--primary);
  font-weight: 500;
  margin-bottom: var(--space-2);
}

/* Footer */
footer {
  text-align: center;
  padding: var(--space-12) var(--space-4);
  background-color: var(--surface);
  border-top: 1px solid var(--border);
}

.contact-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  flex-wrap: wrap;
  margin-bottom: var(--space-6);
}

.contact-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-secondary);
}

.contact-link:hover {
  color: var(--primary);
}

.copyright {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

@media (max-width: 768px) {
  .hero-content,
  .project-card {
    grid-template-columns: 1fr;
  }

  .hero-text h1 {
    font-size: 2.25rem;
  }

  .hero-image img {
    width: 200px;
    height: 200px;
  }
}
"#;
