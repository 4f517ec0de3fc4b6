use crate::components::AuthForm;
use crate::toast::{provide_toaster, ToastOutlet};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        // External stylesheets
        <Stylesheet id="ionicons" href="https://code.ionicframework.com/ionicons/2.0.1/css/ionicons.min.css"/>
        <Stylesheet id="app-css" href="/pkg/messenger-auth.css"/>

        <Title text="Messenger"/>

        <Router>
            <main>
                <Routes>
                    <Route
                        path="/"
                        view=|| view! { <AuthPage/> }
                    />
                </Routes>
            </main>
            // Notifications
            <ToastOutlet/>
        </Router>
    }
}

#[component]
fn AuthPage() -> impl IntoView {
    view! {
        <div class="flex min-h-full flex-col justify-center py-12 sm:px-6 lg:px-8 bg-gray-100">
            <div class="sm:mx-auto sm:w-full sm:max-w-md">
                <i class="ion-chatbubbles mx-auto block text-center text-5xl text-sky-500" aria-hidden="true"></i>
                <h2 class="mt-6 text-center text-3xl font-bold tracking-tight text-gray-900">
                    "Sign in to your account"
                </h2>
            </div>
            <AuthForm/>
        </div>
    }
}
