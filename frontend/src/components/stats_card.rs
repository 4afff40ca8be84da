use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use wasm_bindgen::{closure::Closure, JsCast};
use yew::{prelude::*, use_effect_with};
use yew_router::prelude::*;
use zetho_admin_shared::animation::{group_thousands, CounterAnimation};

use crate::{config::COUNTER_ANIMATION_MS, router::Route};

type FrameClosure = Closure<dyn FnMut()>;
type SharedFrameClosure = Rc<RefCell<Option<FrameClosure>>>;

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: u64,
}

/// Counts up from zero to `value` on mount and whenever `value` changes.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let shown = use_state(|| 0_u64);

    {
        let shown = shown.clone();
        use_effect_with(props.value, move |target| {
            let animation = CounterAnimation {
                target: *target,
                duration_ms: COUNTER_ANIMATION_MS,
            };
            let raf_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
            let frame_cb: SharedFrameClosure = Rc::new(RefCell::new(None));
            let window_opt = web_sys::window();

            match window_opt.as_ref() {
                Some(window) => {
                    let started_at = js_sys::Date::now();
                    let frame_cb_for_frame = frame_cb.clone();
                    let raf_for_frame = raf_handle.clone();
                    let window_for_frame = window.clone();

                    let on_frame = Closure::wrap(Box::new(move || {
                        let frame = animation.frame_at(js_sys::Date::now() - started_at);
                        shown.set(frame.value);
                        if frame.done {
                            raf_for_frame.set(None);
                            return;
                        }
                        if let Some(cb) = frame_cb_for_frame.borrow().as_ref() {
                            if let Ok(id) =
                                window_for_frame.request_animation_frame(cb.as_ref().unchecked_ref())
                            {
                                raf_for_frame.set(Some(id));
                            }
                        }
                    }) as Box<dyn FnMut()>);

                    *frame_cb.borrow_mut() = Some(on_frame);

                    if let Some(cb) = frame_cb.borrow().as_ref() {
                        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref())
                        {
                            raf_handle.set(Some(id));
                        }
                    }
                },
                None => shown.set(animation.target),
            }

            move || {
                if let (Some(window), Some(id)) = (window_opt.as_ref(), raf_handle.get()) {
                    let _ = window.cancel_animation_frame(id);
                }
                // Breaks the closure's reference to itself.
                frame_cb.borrow_mut().take();
            }
        });
    }

    html! {
        <span class="tabular-nums">{ group_thousands(*shown) }</span>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: AttrValue,
    pub label: AttrValue,
    pub value: u64,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub route: Option<Route>,
    #[prop_or(true)]
    pub animate: bool,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let value = if props.animate {
        html! { <AnimatedNumber value={props.value} /> }
    } else {
        html! { <span class="tabular-nums">{ group_thousands(props.value) }</span> }
    };

    let content = html! {
        <>
            <span
                class="stats-card-icon mb-3 inline-flex h-10 w-10 items-center justify-center rounded-xl bg-indigo-50 text-xl"
                aria-hidden="true"
            >
                { props.icon.clone() }
            </span>
            <p class="text-sm font-medium text-slate-500">{ props.label.clone() }</p>
            <strong class="stats-card-value block text-2xl font-bold text-slate-900">{ value }</strong>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="mt-1 text-xs text-slate-400">{ subtitle }</p>
            }
        </>
    };

    let card_classes = classes!(
        "stats-card",
        "block",
        "rounded-2xl",
        "bg-white",
        "p-5",
        "shadow-sm",
        "transition-shadow",
        "hover:shadow-md"
    );

    if let Some(route) = &props.route {
        html! {
            <Link<Route> to={route.clone()} classes={card_classes}>
                { content }
            </Link<Route>>
        }
    } else {
        html! {
            <div class={card_classes} role="status">
                { content }
            </div>
        }
    }
}
