use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, coverage::Coverage, fleet::Fleet, footer::Footer, hero::Hero,
    reservation::ReservationSection, responsive_indicator::ResponsiveIndicator, services::Services,
    skip_to_content::SkipToContent,
};
use crate::config;
use crate::Nav;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <style>
                {r#"
                    body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: #f8fafc; }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        padding: 0;
                        margin: -1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                        white-space: nowrap;
                        border: 0;
                    }
                    .landing main { padding-top: 4rem; }
                    .section { padding: 5rem 1rem; scroll-margin-top: 4rem; }
                    .section-inner { max-width: 80rem; margin: 0 auto; }
                    .section-header { text-align: center; margin-bottom: 4rem; }
                    .section-header h2 { color: #0f172a; margin: 0 0 1rem; }
                    .section-header p { color: #4b5563; max-width: 42rem; margin: 0 auto; }
                    .section-rule { width: 6rem; height: 4px; background: #facc15; margin: 0 auto 1.5rem; }
                    @media (prefers-reduced-motion: reduce) {
                        * { transition: none !important; animation: none !important; scroll-behavior: auto !important; }
                    }
                "#}
            </style>
            <SkipToContent />
            <Nav />
            <main id={config::SKIP_LINK_TARGET} tabindex="-1">
                <Hero />
                <About />
                <Services />
                <Fleet />
                <Coverage />
                <ReservationSection />
                <Contact />
            </main>
            <Footer />
            <ResponsiveIndicator />
        </div>
    }
}
