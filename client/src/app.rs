//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::space_form::SpaceForm;
use crate::components::space_list::SpaceList;
use crate::state::listing::ListingState;

/// Root application component.
///
/// Provides the listing state to the grid and toggles the create dialog.
/// A successful create closes the dialog and reloads the current page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let listing = RwSignal::new(ListingState::default());
    provide_context(listing);

    let show_form = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_form.set(false));
    let on_created = Callback::new(move |()| {
        show_form.set(false);
        listing.update(ListingState::retry);
    });

    view! {
        <Title text="Space Rental"/>

        <header class="app-header">
            <div class="app-header__brand">
                <h1>"Discover Amazing Spaces"</h1>
                <p>"Find the perfect space for your needs, from garages to backyards."</p>
            </div>
            <button class="btn btn--primary" on:click=move |_| show_form.set(true)>
                "+ List Your Space"
            </button>
        </header>

        <main class="app-main">
            <SpaceList/>
        </main>

        <Show when=move || show_form.get()>
            <SpaceForm on_close=on_close on_created=on_created/>
        </Show>
    }
}
