use composer_core::{
    builtin_catalog, ComposerConfig, Platform, PlatformCatalog, PlatformCategory, PlatformFilter,
};
use composer_runtime::{use_composer_runtime, ComposerProvider, ComposerShell, PlatformIcon};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DIRECTORY_ICON_PX: u16 = 24;

/// Platforms listed by the directory route. Unknown category tokens list everything.
fn directory_platforms(catalog: &PlatformCatalog, category: Option<&str>) -> Vec<Platform> {
    let filter = PlatformFilter {
        category: category.and_then(PlatformCategory::parse),
        ..PlatformFilter::default()
    };
    catalog.filter(&filter).cloned().collect()
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Social Swift" />
        <Meta
            name="description"
            content="Compose one post and share it across your social platforms."
        />

        <ComposerProvider
            host_services=platform_host_web::build_host_services()
            config=ComposerConfig::default()
            catalog=builtin_catalog()
        >
            <Router>
                <div class="site-root">
                    <Routes>
                        <Route path="" view=ComposerEntry />
                        <Route path="/platforms" view=PlatformDirectory />
                        <Route path="/platforms/:category" view=PlatformDirectory />
                    </Routes>
                </div>
            </Router>
        </ComposerProvider>
    }
}

#[component]
pub fn ComposerEntry() -> impl IntoView {
    view! { <ComposerShell /> }
}

#[component]
fn PlatformDirectory() -> impl IntoView {
    let catalog = use_composer_runtime().catalog;
    let params = use_params_map();
    let platforms = move || {
        params.with(|map| directory_platforms(catalog, map.get("category").map(String::as_str)))
    };

    view! {
        <section class="platform-directory">
            <h1>"Supported platforms"</h1>
            <nav class="platform-directory-nav">
                <A href="/">"Back to composer"</A>
                <A href="/platforms">"All"</A>
                {PlatformCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <A href=format!("/platforms/{}", category.as_str())>
                                {category.as_str()}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <ul class="platform-directory-list">
                <For each=platforms key=|platform| platform.id.clone() let:platform>
                    <li>
                        <PlatformIcon identifier=platform.identifier() size_px=DIRECTORY_ICON_PX />
                        <span>{platform.name.clone()}</span>
                    </li>
                </For>
            </ul>
        </section>
    }
}
