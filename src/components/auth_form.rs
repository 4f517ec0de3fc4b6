use super::{AuthSocialButton, Button, ButtonType, Input};
use crate::auth::{ServerFnClient, SocialProvider};
use crate::form::{AuthController, FormBinding, FormVariant, SubmissionState};
use crate::toast::use_toaster;
use leptos::*;

#[component]
pub fn AuthForm(
    /// Variant shown first, signup unless given.
    #[prop(optional)]
    initial_variant: FormVariant,
) -> impl IntoView {
    let variant = create_rw_signal(initial_variant);
    let loading = create_rw_signal(false);
    let binding = FormBinding::new();
    let controller = AuthController::new(ServerFnClient, use_toaster(), loading);

    let status = Signal::derive(move || SubmissionState::from(loading.get()));

    let toggle_variant = move |_| {
        variant.update(|variant| *variant = variant.toggle());
        binding.clear_errors();
    };

    let on_submit = {
        let controller = controller.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let current = variant.get_untracked();
            let Some(payload) = binding.collect(current) else {
                return;
            };
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit(current, payload).await;
            });
        }
    };

    let social_action = Callback::new(move |provider: SocialProvider| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.social_action(provider).await;
        });
    });

    view! {
        <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
            <div class="bg-white px-4 py-8 shadow sm:rounded-lg sm:px-10">
                <form class="space-y-6" on:submit=on_submit>
                    // Fields for the active variant
                    {move || {
                        let current = variant.get();
                        current
                            .fields()
                            .iter()
                            .map(|&field| {
                                view! {
                                    <Input
                                        field
                                        variant=current
                                        value=binding.value(field)
                                        error=binding.error(field)
                                        disabled=loading
                                    />
                                }
                            })
                            .collect_view()
                    }}
                    <div>
                        <Button button_type=ButtonType::Submit full_width=true status>
                            {move || variant.get().submit_label()}
                        </Button>
                    </div>
                </form>

                // Social sign-in
                <div class="mt-6">
                    <div class="relative">
                        <div class="absolute inset-0 flex items-center">
                            <div class="w-full border-t border-gray-300"></div>
                        </div>
                        <div class="relative flex justify-center text-sm">
                            <span class="bg-white px-2 text-gray-500">"Or continue with"</span>
                        </div>
                    </div>
                    <div class="mt-6 flex gap-2">
                        {SocialProvider::ALL
                            .into_iter()
                            .map(|provider| {
                                view! {
                                    <AuthSocialButton
                                        provider
                                        disabled=loading
                                        on_click=social_action
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Variant toggle
                <div class="flex gap-2 justify-center text-sm mt-6 px-2 text-gray-500">
                    <div>{move || variant.get().toggle_prompt()}</div>
                    <div on:click=toggle_variant class="underline cursor-pointer">
                        {move || variant.get().toggle_label()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "ssr")]
    #[test]
    fn signup_renders_name_field() {
        let html = leptos::ssr::render_to_string(|| view! { <AuthForm/> }).to_string();
        assert!(html.contains(r#"id="name""#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"id="password""#));
        assert!(html.contains("Sign up"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn login_omits_name_field() {
        let html = leptos::ssr::render_to_string(|| {
            view! { <AuthForm initial_variant=FormVariant::Login/> }
        })
        .to_string();
        assert!(!html.contains(r#"id="name""#));
        assert!(html.contains(r#"id="email""#));
        assert!(html.contains(r#"id="password""#));
        assert!(html.contains("Log in"));
        assert!(html.contains("New to Messenger?"));
    }
}
