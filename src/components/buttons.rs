use crate::auth::SocialProvider;
use crate::form::SubmissionState;
use leptos::*;

const BASE_CLASS: &str = "flex justify-center rounded-md px-3 py-2 text-sm font-semibold \
    focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Glyphs a button may carry. Rendered with ionicons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Github,
    Google,
    Spinner,
}

impl Glyph {
    pub fn class(self) -> &'static str {
        match self {
            Glyph::Github => "ion-social-github",
            Glyph::Google => "ion-social-google",
            Glyph::Spinner => "ion-load-c",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub full_width: bool,
    pub secondary: bool,
    pub danger: bool,
}

impl ButtonStyle {
    pub fn class(&self, inert: bool) -> String {
        let mut classes = vec![BASE_CLASS];
        if inert {
            classes.push("opacity-50 cursor-default");
        }
        if self.full_width {
            classes.push("w-full");
        }
        classes.push(if self.secondary {
            "text-gray-900"
        } else {
            "text-white"
        });
        if self.danger {
            classes.push("bg-rose-500 hover:bg-rose-600 focus-visible:outline-rose-600");
        } else if !self.secondary {
            classes.push("bg-sky-500 hover:bg-sky-600 focus-visible:outline-sky-600");
        }
        classes.join(" ")
    }
}

/// A button ignores input when explicitly disabled or while loading.
pub fn is_inert(disabled: bool, status: SubmissionState) -> bool {
    disabled || status.is_loading()
}

fn spinner_class(status: SubmissionState) -> &'static str {
    if status.is_loading() {
        "self-center ml-2"
    } else {
        "self-center ml-2 hidden"
    }
}

#[component]
pub fn Icon(glyph: Glyph, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {}", glyph.class(), class).trim().to_string() aria-hidden="true"></i> }
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] secondary: bool,
    #[prop(optional)] danger: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] status: MaybeSignal<SubmissionState>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
) -> impl IntoView {
    let style = ButtonStyle {
        full_width,
        secondary,
        danger,
    };
    let status = Signal::derive(move || status.get());
    let inert = Signal::derive(move || is_inert(disabled.get(), status.get()));

    view! {
        <button
            type=button_type.as_str()
            class=move || style.class(inert.get())
            disabled=move || inert.get()
            on:click=move |ev| {
                if inert.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
            <div class=move || spinner_class(status.get())>
                <Icon glyph=Glyph::Spinner class="animate-spin"/>
            </div>
        </button>
    }
}

#[component]
pub fn AuthSocialButton(
    provider: SocialProvider,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_click: Callback<SocialProvider>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="inline-flex w-full justify-center rounded-md bg-white px-4 py-2 text-gray-500 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50 focus:outline-offset-0"
            class:opacity-50=move || disabled.get()
            aria-label=provider.label()
            disabled=move || disabled.get()
            on:click=move |_| {
                if !disabled.get_untracked() {
                    on_click.call(provider);
                }
            }
        >
            <Icon glyph=provider.glyph()/>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_disables_and_shows_spinner() {
        assert!(is_inert(false, SubmissionState::Loading));
        assert!(!spinner_class(SubmissionState::Loading).contains("hidden"));
    }

    #[test]
    fn disabled_idle_hides_spinner() {
        assert!(is_inert(true, SubmissionState::Idle));
        assert!(spinner_class(SubmissionState::Idle).contains("hidden"));
    }

    #[test]
    fn idle_enabled_is_interactive() {
        assert!(!is_inert(false, SubmissionState::Idle));
    }

    #[test]
    fn class_list_follows_variants() {
        let primary = ButtonStyle::default().class(false);
        assert!(primary.contains("bg-sky-500"));
        assert!(primary.contains("text-white"));
        assert!(!primary.contains("w-full"));
        assert!(!primary.contains("opacity-50"));

        let danger = ButtonStyle {
            danger: true,
            full_width: true,
            ..Default::default()
        }
        .class(true);
        assert!(danger.contains("bg-rose-500"));
        assert!(!danger.contains("bg-sky-500"));
        assert!(danger.contains("w-full"));
        assert!(danger.contains("opacity-50"));

        let secondary = ButtonStyle {
            secondary: true,
            ..Default::default()
        }
        .class(false);
        assert!(secondary.contains("text-gray-900"));
        assert!(!secondary.contains("bg-sky-500"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn loading_button_renders_disabled_with_spinner() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <Button status=SubmissionState::Loading>"Sign up"</Button> }
        })
        .to_string();
        assert!(html.contains(r#"disabled="""#), "{html}");
        assert!(html.contains("self-center ml-2"), "{html}");
        assert!(!html.contains("ml-2 hidden"), "{html}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn disabled_idle_button_renders_without_spinner() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <Button disabled=true>"Sign up"</Button> }
        })
        .to_string();
        assert!(html.contains(r#"disabled="""#), "{html}");
        assert!(html.contains("ml-2 hidden"), "{html}");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn idle_button_renders_enabled() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <Button button_type=ButtonType::Submit>"Log in"</Button> }
        })
        .to_string();
        assert!(!html.contains("disabled"), "{html}");
        assert!(html.contains(r#"type="submit""#), "{html}");
        assert!(html.contains("ml-2 hidden"), "{html}");
    }

    #[test]
    fn button_type_attribute() {
        assert_eq!(ButtonType::default().as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
    }
}
