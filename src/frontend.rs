use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::anchors::{self, classify_anchor, initial_fragment, AnchorAction};
use crate::browser;
use crate::config::SiteConfig;
use crate::countdown::{self, EVENT_START_UNIX_MS};
use crate::frame::FrameCoalescer;
use crate::layout::{header_total, nearest_to_viewport_center, LayoutOffset};
use crate::logging::{log_event, now_unix_millis, LogLevel};
use crate::modal::{ModalAction, ModalState};
use crate::nav::{scroll_locked, MenuState, NavRegistry, NAV_LINK_CLASS, NAV_SECTIONS};
use crate::problems::{ProblemRegistry, ProblemStatement};

const SITE_TITLE: &str = "Hackathon 2026";
const OPEN_MODAL_GLOBAL: &str = "openPSModal";
const CLOSE_MODAL_GLOBAL: &str = "closePSModal";
const SUMMARY_MAX_CHARS: usize = 160;
const COUNTDOWN_TICK_MS: u32 = 1_000;

struct SiteContext {
    config: SiteConfig,
    reduced_motion: bool,
    offset: LayoutOffset,
    header_ref: NodeRef,
    nav_ref: NodeRef,
    sections: RefCell<NavRegistry<Element>>,
    set_active: UseStateSetter<Option<&'static str>>,
    layout_frame: FrameCoalescer<AnimationFrame>,
    spy_frame: FrameCoalescer<AnimationFrame>,
}

impl SiteContext {
    fn bind_sections(&self) {
        let Some(document) = browser::document() else {
            return;
        };

        let registry = NavRegistry::resolve(NAV_SECTIONS, |id| document.get_element_by_id(id));
        log_event(
            &self.config,
            LogLevel::Debug,
            "nav_registry_resolved",
            serde_json::json!({
                "links": NAV_SECTIONS.len(),
                "sections": registry.len(),
            }),
        );
        *self.sections.borrow_mut() = registry;
    }

    fn recompute_offset(&self) {
        let total = header_total(
            browser::rendered_height(self.header_ref.cast::<HtmlElement>()),
            browser::rendered_height(self.nav_ref.cast::<HtmlElement>()),
        );
        if self.offset.publish(total) {
            browser::publish_header_offset(total);
        }
    }

    fn update_active_link(&self) {
        let active = {
            let sections = self.sections.borrow();
            let boxes = sections.sections().map(browser::section_box);
            nearest_to_viewport_center(boxes, browser::viewport_height())
                .and_then(|index| sections.id_at(index))
        };
        self.set_active.set(active);
    }

    fn refresh_layout(&self) {
        self.recompute_offset();
        self.update_active_link();
    }

    fn schedule_layout_refresh(self: &Rc<Self>) {
        let ctx = Rc::clone(self);
        self.layout_frame.schedule(move || {
            request_animation_frame(move |_| {
                let _frame = ctx.layout_frame.complete();
                ctx.refresh_layout();
            })
        });
    }

    fn schedule_active_link(self: &Rc<Self>) {
        let ctx = Rc::clone(self);
        self.spy_frame.schedule(move || {
            request_animation_frame(move |_| {
                let _frame = ctx.spy_frame.complete();
                ctx.update_active_link();
            })
        });
    }

    fn page(&self) -> Option<browser::WindowPage> {
        browser::WindowPage::current(self.reduced_motion)
    }

    fn navigate(&self, target_id: &str) {
        let Some(page) = self.page() else {
            return;
        };
        if !anchors::navigate(&page, target_id, self.offset.get()) {
            return;
        }

        log_event(
            &self.config,
            LogLevel::Debug,
            "anchor_navigation",
            serde_json::json!({ "target": target_id }),
        );
    }

    fn route_anchor_click(&self, event: &Event) {
        let Some(anchor) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a").ok().flatten())
        else {
            return;
        };

        let primary = anchor.class_list().contains(NAV_LINK_CLASS);
        let href = anchor.get_attribute("href");
        match classify_anchor(href.as_deref(), primary, browser::element_exists) {
            AnchorAction::Default => {}
            AnchorAction::Swallow => event.prevent_default(),
            AnchorAction::Intercept(target_id) => {
                event.prevent_default();
                self.navigate(&target_id);
            }
        }
    }

    fn on_load(self: &Rc<Self>) {
        self.refresh_layout();

        let Some(target_id) = browser::current_fragment()
            .as_deref()
            .and_then(initial_fragment)
            .map(str::to_string)
        else {
            return;
        };

        let ctx = Rc::clone(self);
        Timeout::new(0, move || {
            if let Some(page) = ctx.page() {
                anchors::scroll_to_section(&page, &target_id, ctx.offset.get());
            }
        })
        .forget();
    }
}

#[derive(PartialEq)]
struct ModalModel {
    config: SiteConfig,
    registry: Rc<ProblemRegistry>,
    state: ModalState,
}

impl Reducible for ModalModel {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Some(next) = self.state.transition(&self.registry, &action) else {
            if let ModalAction::Open(key) = &action {
                if self.registry.get(key).is_none() {
                    log_event(
                        &self.config,
                        LogLevel::Debug,
                        "modal_open_unknown",
                        serde_json::json!({ "key": key }),
                    );
                }
            }
            return self;
        };

        match next.shown() {
            Some(record) => log_event(
                &self.config,
                LogLevel::Info,
                "modal_open",
                serde_json::json!({ "key": record.key, "id": record.id }),
            ),
            None => log_event(&self.config, LogLevel::Debug, "modal_close", serde_json::json!({})),
        }

        Rc::new(Self {
            config: self.config.clone(),
            registry: Rc::clone(&self.registry),
            state: next,
        })
    }
}

struct ModalGlobals {
    _open: Closure<dyn Fn(JsValue)>,
    _close: Closure<dyn Fn()>,
}

impl ModalGlobals {
    fn install(dispatcher: UseReducerDispatcher<ModalModel>) -> Option<Self> {
        let win = window()?;

        let open_dispatcher = dispatcher.clone();
        let open = Closure::<dyn Fn(JsValue)>::new(move |key: JsValue| {
            if let Some(key) = key.as_string() {
                open_dispatcher.dispatch(ModalAction::Open(key));
            }
        });
        let close = Closure::<dyn Fn()>::new(move || {
            dispatcher.dispatch(ModalAction::Close);
        });

        browser::expose_global(&win, OPEN_MODAL_GLOBAL, open.as_ref());
        browser::expose_global(&win, CLOSE_MODAL_GLOBAL, close.as_ref());

        Some(Self {
            _open: open,
            _close: close,
        })
    }
}

impl Drop for ModalGlobals {
    fn drop(&mut self) {
        browser::remove_global(OPEN_MODAL_GLOBAL);
        browser::remove_global(CLOSE_MODAL_GLOBAL);
    }
}

fn tick_countdown(config: &SiteConfig) {
    let Some(document) = browser::document() else {
        return;
    };

    let now = i64::try_from(now_unix_millis()).unwrap_or(i64::MAX);
    let display = browser::CountdownDisplay::locate(&document);
    if let Err(missing) = countdown::tick(display, EVENT_START_UNIX_MS, now) {
        log_event(
            config,
            LogLevel::Error,
            "countdown_display_missing",
            serde_json::json!({ "missing": missing }),
        );
    }
}

fn start_countdown(config: SiteConfig) -> Interval {
    tick_countdown(&config);
    Interval::new(COUNTDOWN_TICK_MS, move || tick_countdown(&config))
}

#[derive(Properties, PartialEq)]
struct ProblemModalProps {
    state: ModalState,
    on_close: Callback<()>,
}

#[function_component(ProblemModal)]
fn problem_modal(props: &ProblemModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let backdrop_ref = backdrop_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(backdrop) = backdrop_ref.get() else {
                return;
            };
            let backdrop: EventTarget = backdrop.into();
            if event.target().as_ref() == Some(&backdrop) {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let open = props.state.is_open();
    let (id, domain, problem_text) = match props.state.shown() {
        Some(record) => (
            record.id.clone(),
            record.domain.clone(),
            record.problem_text.clone(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    html! {
        <div
            id="psModal"
            class={classes!("modal", open.then_some("is-open"))}
            aria-hidden={(!open).to_string()}
            ref={backdrop_ref}
            onclick={on_backdrop_click}
        >
            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="psId">
                <button class="modal-close" type="button" aria-label="Close" onclick={on_close_click}>
                    <span aria-hidden="true">{"×"}</span>
                </button>
                <h3 id="psId" class="modal-id">{id}</h3>
                <p id="psDomain" class="modal-domain">{domain}</p>
                <div id="psProblemText" class="modal-text">{problem_text}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProblemCardProps {
    record: Rc<ProblemStatement>,
    on_open: Callback<String>,
}

#[function_component(ProblemCard)]
fn problem_card(props: &ProblemCardProps) -> Html {
    let onclick = {
        let key = props.record.key.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(key.clone()))
    };

    let first_line = props.record.problem_text.lines().next().unwrap_or_default().trim();
    let mut summary: String = first_line.chars().take(SUMMARY_MAX_CHARS).collect();
    if summary.len() < first_line.len() {
        summary.push('…');
    }

    html! {
        <li class="ps-card">
            <p class="ps-card-id">{props.record.id.clone()}</p>
            <p class="ps-card-summary">{summary}</p>
            <button class="ps-card-button" type="button" onclick={onclick}>
                {"View details"}
            </button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
    pub registry: Rc<ProblemRegistry>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let menu = use_state_eq(MenuState::default);
    let active = use_state_eq(|| None::<&'static str>);
    let header_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let modal = use_reducer(|| ModalModel {
        config: props.config.clone(),
        registry: Rc::clone(&props.registry),
        state: ModalState::Closed,
    });

    let ctx = {
        let config = props.config.clone();
        let header_ref = header_ref.clone();
        let nav_ref = nav_ref.clone();
        let set_active = active.setter();
        use_memo((), move |_| SiteContext {
            config,
            reduced_motion: browser::prefers_reduced_motion(),
            offset: LayoutOffset::default(),
            header_ref,
            nav_ref,
            sections: RefCell::new(NavRegistry::default()),
            set_active,
            layout_frame: FrameCoalescer::default(),
            spy_frame: FrameCoalescer::default(),
        })
    };

    {
        let ctx = ctx.clone();
        let dispatcher = modal.dispatcher();
        use_effect_with((), move |_| {
            ctx.bind_sections();
            ctx.refresh_layout();

            let mut listeners = Vec::new();
            let mut globals = None;
            let mut countdown = None;

            if let (Some(win), Some(document)) = (window(), browser::document()) {
                let scroll_ctx = ctx.clone();
                listeners.push(EventListener::new(&win, "scroll", move |_| {
                    scroll_ctx.schedule_active_link();
                }));

                let resize_ctx = ctx.clone();
                listeners.push(EventListener::new(&win, "resize", move |_| {
                    resize_ctx.refresh_layout();
                }));

                let click_ctx = ctx.clone();
                listeners.push(EventListener::new(&document, "click", move |event| {
                    click_ctx.route_anchor_click(event);
                }));

                let key_dispatcher = dispatcher.clone();
                listeners.push(EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape");
                    if is_escape {
                        key_dispatcher.dispatch(ModalAction::Close);
                    }
                }));

                if browser::document_is_complete(&document) {
                    ctx.on_load();
                } else {
                    let load_ctx = ctx.clone();
                    listeners.push(EventListener::once(&win, "load", move |_| {
                        load_ctx.on_load();
                    }));
                }

                globals = ModalGlobals::install(dispatcher);
                countdown = Some(start_countdown(ctx.config.clone()));
            }

            move || {
                drop(countdown);
                drop(globals);
                drop(listeners);
            }
        });
    }

    {
        let ctx = ctx.clone();
        use_effect_with(*menu, move |_| {
            ctx.schedule_layout_refresh();
            || ()
        });
    }

    use_effect_with(
        scroll_locked(*menu, modal.state.is_open()),
        |locked| {
            browser::set_scroll_lock(*locked);
            || ()
        },
    );

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let on_menu_click = {
        let menu = menu.clone();
        Callback::from(move |event: MouseEvent| {
            let on_link = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest("a").ok().flatten())
                .is_some();
            if on_link && menu.open {
                menu.set((*menu).closed());
            }
        })
    };

    let on_open = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |key: String| dispatcher.dispatch(ModalAction::Open(key)))
    };

    let on_close = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ModalAction::Close))
    };

    let nav_links = NAV_SECTIONS.iter().map(|(id, label)| {
        let is_active = *active == Some(*id);
        html! {
            <li>
                <a
                    class={classes!(NAV_LINK_CLASS, is_active.then_some("active"))}
                    href={format!("#{id}")}
                    aria-current={is_active.then_some("page")}
                >
                    {*label}
                </a>
            </li>
        }
    });

    let domain_groups = props.registry.by_domain().into_iter().map(|(domain, records)| {
        html! {
            <div class="ps-domain">
                <h3>{domain.to_string()}</h3>
                <ul class="ps-grid">
                    { for records.into_iter().map(|record| html! {
                        <ProblemCard
                            key={record.key.clone()}
                            record={Rc::clone(record)}
                            on_open={on_open.clone()}
                        />
                    }) }
                </ul>
            </div>
        }
    });

    html! {
        <>
            <a class="skip-link" href="#about">{"Skip to main content"}</a>
            <header class="site-header" ref={header_ref}>
                <a class="brand" href="#home">{SITE_TITLE}</a>
                <button
                    class="nav-toggle"
                    type="button"
                    aria-controls="nav-menu"
                    aria-expanded={(*menu).aria_expanded()}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{"☰"}</span>
                </button>
            </header>
            <nav class="site-nav" aria-label="Primary" ref={nav_ref}>
                <ul
                    id="nav-menu"
                    class={classes!("nav-menu", menu.open.then_some("open"))}
                    onclick={on_menu_click}
                >
                    { for nav_links }
                </ul>
            </nav>

            <main>
                <section id="home" class="hero section-block">
                    <h1>{SITE_TITLE}</h1>
                    <p class="hero-tagline">{"Build for real problems, in one weekend, with people who care."}</p>
                    <p class="hero-date">{"3 September 2026 · 09:00 IST"}</p>
                    <div class="countdown" role="timer" aria-label="Time until the hackathon starts">
                        <div class="countdown-cell"><span id="days" class="countdown-value"></span><span class="countdown-label">{"Days"}</span></div>
                        <div class="countdown-cell"><span id="hours" class="countdown-value"></span><span class="countdown-label">{"Hours"}</span></div>
                        <div class="countdown-cell"><span id="minutes" class="countdown-value"></span><span class="countdown-label">{"Minutes"}</span></div>
                        <div class="countdown-cell"><span id="seconds" class="countdown-value"></span><span class="countdown-label">{"Seconds"}</span></div>
                    </div>
                    <a class="cta" href="#problem-statements">{"Explore problem statements"}</a>
                </section>

                <section id="about" class="section-block" aria-labelledby="about-heading">
                    <h2 id="about-heading">{"About"}</h2>
                    <p>
                        {"A build sprint where teams pick one problem statement, ship a working prototype, "}
                        {"and present it to a panel of mentors. Pick a domain below, read the brief and "}
                        {"bring your team."}
                    </p>
                </section>

                <section id="problem-statements" class="section-block" aria-labelledby="ps-heading">
                    <h2 id="ps-heading">{"Problem Statements"}</h2>
                    { for domain_groups }
                </section>

                <section id="timeline" class="section-block" aria-labelledby="timeline-heading">
                    <h2 id="timeline-heading">{"Timeline"}</h2>
                    <ol class="timeline">
                        <li><span class="muted">{"09:00"}</span>{"Opening and team check-in"}</li>
                        <li><span class="muted">{"10:00"}</span>{"Hacking begins"}</li>
                        <li><span class="muted">{"Day 2, 09:00"}</span>{"Code freeze"}</li>
                        <li><span class="muted">{"Day 2, 10:00"}</span>{"Demos and judging"}</li>
                    </ol>
                </section>

                <section id="contact" class="section-block" aria-labelledby="contact-heading">
                    <h2 id="contact-heading">{"Contact"}</h2>
                    <p>{"Questions about the problem statements or registration? Reach the organising team at the help desk during the event."}</p>
                    <a class="back-to-top" href="#home">{"Back to top"}</a>
                </section>
            </main>

            <ProblemModal state={modal.state.clone()} on_close={on_close} />
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = SiteConfig::from_element(&root);

    let registry = match ProblemRegistry::bundled() {
        Ok(registry) => {
            log_event(
                &config,
                LogLevel::Info,
                "problem_registry_loaded",
                serde_json::json!({ "records": registry.len() }),
            );
            registry
        }
        Err(message) => {
            log_event(
                &config,
                LogLevel::Error,
                "problem_registry_invalid",
                serde_json::json!({ "message": message }),
            );
            ProblemRegistry::default()
        }
    };

    log_event(
        &config,
        LogLevel::Info,
        "site_start",
        serde_json::json!({
            "log_level": config.log_level.as_str(),
            "problem_statements": registry.len(),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config,
            registry: Rc::new(registry),
        },
    )
    .render();
}
