//! Public landing page with the login entry point.

use leptos::prelude::*;

use crate::consts::{HERO_IMAGE_PATH, LOGO_PATH, STORY_IMAGE_PATH};
use crate::state::ui::{Panel, UiState};

const HERO_QUOTE: &str = "“Fordi et godt overblik baner vej for gode og bæredygtige beslutninger”";

const STORY: &str = "Vores historie handler om etik, integritet og respekt. Den begyndte i 2002, da vores \
grundlæggere Tina og Lasse Elvang lærte om alpakauldens kvaliteter under en rygsækrejse til Peru. De blev \
betagede af uldens blødhed og holdbarhed, og begyndte at lege med at kombinere afdæmpet æstetisk design stil \
med århundred gammel peruviansk vævertraditioner og skabe hermed stærke relationer til håndværkere, \
samfundsprojekter og fabrikker. Et år senere blev Elvang født og blev den første virksomhed, der introducerede \
plaider lavet af alpakauld i Skandinavien.";

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="lp-wrapper">
            <header class="lp-header">
                <img class="lp-logo" src=LOGO_PATH alt="Elvang"/>
                <div class="lp-login-btn" on:click=move |_| ui.update(|s| s.open(Panel::Login))>
                    "Login"
                </div>
            </header>
            <section class="lp-hero">
                <div class="lp-hero-left">
                    <h1>"Elvang Lagerstyringssystem"</h1>
                    <p>{HERO_QUOTE}</p>
                </div>
                <img class="lp-hero-img" src=HERO_IMAGE_PATH alt=""/>
            </section>
            <section class="lp-story">
                <img class="lp-story-img" src=STORY_IMAGE_PATH alt=""/>
                <p class="lp-story-text">{STORY}</p>
            </section>
            <footer class="lp-footer"></footer>
        </div>
    }
}
