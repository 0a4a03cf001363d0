use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Navigator, Routable, Router, use_navigator};
use methodo_core::model::{
    DetailedSection, Fiche, FicheDraft, FicheId, Methodology, MethodologyId, MethodologyProgress,
    ThemeToken,
};
use methodo_core::time::fixed_clock;
use services::{AppServices, CatalogService, MethodologyService};

use crate::context::{UiApp, build_app_context};
use crate::views::methodology::MethodologyTestHandles;
use crate::views::{HomeView, MethodologySection, MethodologyView};
use crate::vm::{FicheIntent, MethodologyVm};

pub type ProgressLog = Rc<RefCell<Vec<(MethodologyId, FicheId)>>>;
pub type BackCount = Rc<Cell<u32>>;

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn fiche(id: u64) -> Fiche {
    FicheDraft {
        id: FicheId::new(id),
        group: "Mesure".into(),
        title: format!("Fiche {id}"),
        summary: format!("Résumé {id}"),
        concepts: vec![format!("Concept {id}")],
        numero: Some(u32::try_from(id).expect("small id")),
        detailed_sections: vec![DetailedSection::new(
            format!("Section {id}"),
            format!("Contenu {id}"),
        )],
        questions: vec![format!("Question {id}")],
    }
    .validate()
    .expect("valid fiche")
}

pub fn methodology(fiches_seen: &[u64], total: u32) -> Methodology {
    let fiches_seen: Vec<FicheId> = fiches_seen.iter().copied().map(FicheId::new).collect();
    Methodology::new(
        MethodologyId::new(1),
        "Méthodologie scientifique",
        "Raisonner et mesurer",
        ThemeToken::new("bg-blue-50"),
        MethodologyProgress {
            completed: u32::try_from(fiches_seen.len()).expect("small"),
            total,
            fiches_seen,
        },
    )
    .expect("valid methodology")
}

//
// ─── SECTION HARNESS ───────────────────────────────────────────────────────────
//

#[derive(Props, Clone)]
struct SectionHarnessProps {
    methodology: Methodology,
    fiches: Vec<Fiche>,
    handles: MethodologyTestHandles,
    progress: ProgressLog,
    backs: BackCount,
}

impl PartialEq for SectionHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SectionRoot(props: SectionHarnessProps) -> Element {
    use_context_provider(|| props.handles.clone());
    let progress = Rc::clone(&props.progress);
    let backs = Rc::clone(&props.backs);
    rsx! {
        MethodologySection {
            methodology: props.methodology.clone(),
            fiches: props.fiches.clone(),
            on_back: move |()| backs.set(backs.get() + 1),
            on_progress: move |event: (MethodologyId, FicheId)| {
                progress.borrow_mut().push(event);
            },
        }
    }
}

pub struct SectionHarness {
    pub dom: VirtualDom,
    pub handles: MethodologyTestHandles,
    pub progress: ProgressLog,
    pub backs: BackCount,
}

impl SectionHarness {
    pub fn new(methodology: Methodology, fiches: Vec<Fiche>) -> Self {
        let handles = MethodologyTestHandles::default();
        let progress = ProgressLog::default();
        let backs = BackCount::default();
        let mut dom = VirtualDom::new_with_props(
            SectionRoot,
            SectionHarnessProps {
                methodology,
                fiches,
                handles: handles.clone(),
                progress: Rc::clone(&progress),
                backs: Rc::clone(&backs),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self {
            dom,
            handles,
            progress,
            backs,
        }
    }

    pub fn press_back(&mut self) {
        let back = self.handles.back();
        self.dom.in_runtime(|| back.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: FicheIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn vm(&self) -> MethodologyVm {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.peek().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn reported(&self) -> Vec<(MethodologyId, FicheId)> {
        self.progress.borrow().clone()
    }
}

/// Markup of the card for `id`, from its `<article` tag to the next one.
pub fn card_html(html: &str, id: u64) -> String {
    let marker = format!("data-fiche=\"{id}\"");
    html.split("<article")
        .skip(1)
        .find(|chunk| chunk.contains(&marker))
        .map(str::to_owned)
        .unwrap_or_else(|| panic!("card {id} missing in {html}"))
}

//
// ─── ROUTED VIEW HARNESS ───────────────────────────────────────────────────────
//

pub const CATALOG: &str = r#"{
    "methodologies": [
        { "id": 1, "title": "Méthodologie scientifique", "description": "Mesurer",
          "color": "bg-blue-50",
          "fiches": [
            { "id": 1, "group": "Mesure", "title": "Analyse dimensionnelle" },
            { "id": 2, "group": "Mesure", "title": "Incertitudes" },
            { "id": 3, "group": "Rédaction", "title": "Démonstration" }
          ] },
        { "id": 2, "title": "Organisation", "description": "Planifier",
          "fichesSeen": [4],
          "fiches": [ { "id": 4, "title": "Colles" } ] }
    ]
}"#;

#[derive(Clone)]
struct TestApp {
    methodologies: Arc<MethodologyService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Fiches test"
    }

    fn initial_methodology(&self) -> Option<u64> {
        None
    }

    fn methodologies(&self) -> Arc<MethodologyService> {
        Arc::clone(&self.methodologies)
    }
}

#[derive(Clone, Default)]
pub struct NavigatorHandle(Rc<RefCell<Option<Navigator>>>);

impl NavigatorHandle {
    fn set(&self, navigator: Navigator) {
        *self.0.borrow_mut() = Some(navigator);
    }

    fn get(&self) -> Navigator {
        (*self.0.borrow()).expect("navigator registered")
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Methodology(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: MethodologyTestHandles,
    navigator: NavigatorHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| props.navigator.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/methodology/:methodology_id")]
    MethodologyPage { methodology_id: u64 },
}

#[component]
fn MethodologyPage(methodology_id: u64) -> Element {
    rsx! { MethodologyView { methodology_id } }
}

#[component]
fn Root() -> Element {
    use_context::<NavigatorHandle>().set(use_navigator());
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Methodology(methodology_id) => rsx! { MethodologyView { methodology_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub handles: MethodologyTestHandles,
    pub navigator: NavigatorHandle,
}

impl ViewHarness {
    pub fn new(view: ViewKind) -> Self {
        let catalog = CatalogService::from_json(CATALOG).expect("catalog");
        let services = AppServices::new(catalog, fixed_clock()).expect("services");
        let handles = MethodologyTestHandles::default();
        let navigator = NavigatorHandle::default();
        let app = Arc::new(TestApp {
            methodologies: services.methodologies(),
        });
        let mut dom = VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                view,
                handles: handles.clone(),
                navigator: navigator.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self {
            dom,
            services,
            handles,
            navigator,
        }
    }

    /// Follow an in-app link to a methodology page.
    pub fn open_methodology(&mut self, methodology_id: u64) {
        let navigator = self.navigator.get();
        self.dom.in_runtime(|| {
            let _ = navigator.push(TestRoute::MethodologyPage { methodology_id });
        });
        drive_dom(&mut self.dom);
    }

    pub fn press_back(&mut self) {
        let back = self.handles.back();
        self.dom.in_runtime(|| back.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: FicheIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}
