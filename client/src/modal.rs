use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Sort,
    Stats,
    Faq,
}

/// At most one modal is open at a time.
#[derive(Clone, Copy)]
pub struct ActiveModal(pub RwSignal<Option<ModalKind>>);

struct KeydownBinding {
    window: web_sys::Window,
    handler: Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

thread_local! {
    static KEYDOWN_BINDING: RefCell<Option<KeydownBinding>> = const { RefCell::new(None) };
}

/// Close on Escape and lock page scroll while anything is open.
pub fn bind_modal_behavior(active: RwSignal<Option<ModalKind>>) {
    Effect::new(move || {
        dom::set_body_scroll_locked(active.get().is_some());
    });

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };

        KEYDOWN_BINDING.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                let _ = old.window.remove_event_listener_with_callback(
                    "keydown",
                    old.handler.as_ref().unchecked_ref(),
                );
            }
        });

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Escape" && active.get_untracked().is_some() {
                    active.set(None);
                }
            });

        if window
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            KEYDOWN_BINDING.with(|slot| {
                *slot.borrow_mut() = Some(KeydownBinding {
                    window: window.clone(),
                    handler,
                });
            });
        }
    });
}

fn is_overlay_click(e: &web_sys::MouseEvent) -> bool {
    match (e.target(), e.current_target()) {
        (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
        _ => false,
    }
}

/// Overlay + dialog frame. The body is only built while the modal is open.
#[component]
pub fn Modal(
    kind: ModalKind,
    id: &'static str,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let ActiveModal(active) = expect_context();
    let is_open = move || active.get() == Some(kind);

    view! {
        <div
            id=id
            class="modal"
            class:active=is_open
            on:click=move |e: web_sys::MouseEvent| {
                if is_overlay_click(&e) {
                    active.set(None);
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" title="Закрыть" on:click=move |_| active.set(None)>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="modal-body">
                    {move || is_open().then(|| children())}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FaqModal() -> impl IntoView {
    view! {
        <Modal kind=ModalKind::Faq id="faqModal" title="Вопросы и ответы">
            <div class="faq-item">
                <h3>"Что это за список?"</h3>
                <p>"Игроки, замеченные в нечестной игре или неподобающем поведении, с описанием и доказательствами."</p>
            </div>
            <div class="faq-item">
                <h3>"Как найти игрока?"</h3>
                <p>"Введите ник, SteamID (STEAM_0:Y:Z), SteamID64 или ссылку на профиль Steam. SteamID64 и ссылки преобразуются автоматически."</p>
            </div>
            <div class="faq-item">
                <h3>"Что значит «точное совпадение SteamID»?"</h3>
                <p>"При включённой опции SteamID должен совпадать полностью, иначе достаточно совпадения части."</p>
            </div>
        </Modal>
    }
}
