//! Listing grid with search, filters, and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and mutates the shared `RwSignal<ListingState>` provided by `App`.
//! A memoized load key (query + reload counter) drives fetching, so filter
//! edits and retries both refetch while unrelated state changes do not.

use leptos::prelude::*;
use listings::{Space, SpaceType};

use crate::components::space_card::SpaceCard;
use crate::state::listing::ListingState;

#[component]
pub fn SpaceList() -> impl IntoView {
    let listing = expect_context::<RwSignal<ListingState>>();

    let load_key = Memo::new(move |_| listing.with(|s| (s.query(), s.reload)));

    Effect::new(move |_| {
        let (query, _) = load_key.get();
        let ticket = listing.try_update(ListingState::begin_load).unwrap_or_default();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_spaces(&query).await;
            if let Err(e) = &result {
                log::warn!("space list load failed: {e}");
            }
            listing.update(|s| s.finish_load(ticket, result));
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = (query, ticket);
        }
    });

    view! {
        <section class="space-list">
            <SearchBar/>
            <FilterBar/>

            <Show when=move || listing.with(|s| s.error.is_some())>
                <div class="space-list__error">
                    <p>{move || listing.with(|s| s.error.clone().unwrap_or_default())}</p>
                    <button class="btn btn--primary" on:click=move |_| listing.update(ListingState::retry)>
                        "Try Again"
                    </button>
                </div>
            </Show>

            <Show when=move || listing.with(|s| s.loading)>
                <div class="space-list__loading" aria-busy="true">"Loading spaces..."</div>
            </Show>

            <Show when=move || listing.with(ListingState::is_empty)>
                <div class="space-list__empty">
                    <h3>"No spaces found"</h3>
                    <p>"Try adjusting your search or filters."</p>
                </div>
            </Show>

            <div class="space-list__grid">
                <For
                    each=move || listing.with(|s| s.spaces.clone())
                    key=|space: &Space| (space.id, space.updated_at)
                    children=|space| view! { <SpaceCard space=space/> }
                />
            </div>

            <Pagination/>
        </section>
    }
}

#[component]
fn SearchBar() -> impl IntoView {
    let listing = expect_context::<RwSignal<ListingState>>();

    view! {
        <form
            class="space-list__search"
            on:submit=move |ev| {
                ev.prevent_default();
                listing.update(ListingState::submit_search);
            }
        >
            <input
                type="search"
                placeholder="Search spaces by title, description, or location..."
                prop:value=move || listing.with(|s| s.search_input.clone())
                on:input=move |ev| listing.update(|s| s.set_search_input(event_target_value(&ev)))
            />
            <button class="btn btn--primary" type="submit">"Search"</button>
        </form>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let listing = expect_context::<RwSignal<ListingState>>();

    view! {
        <div class="space-list__filters">
            <select on:change=move |ev| listing.update(|s| s.set_space_type(&event_target_value(&ev)))>
                <option value="">"All Types"</option>
                {SpaceType::ALL
                    .into_iter()
                    .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <input
                type="text"
                placeholder="Enter city..."
                on:change=move |ev| listing.update(|s| s.set_city(&event_target_value(&ev)))
            />
            <select on:change=move |ev| listing.update(|s| s.set_availability(&event_target_value(&ev)))>
                <option value="">"All Spaces"</option>
                <option value="true">"Available Only"</option>
                <option value="false">"Unavailable Only"</option>
            </select>
        </div>
    }
}

#[component]
fn Pagination() -> impl IntoView {
    let listing = expect_context::<RwSignal<ListingState>>();

    let go_to = move |page: u32| listing.update(|s| s.go_to_page(page));

    view! {
        <Show when=move || listing.with(|s| s.total_pages > 1)>
            <nav class="space-list__pagination">
                <button
                    class="btn"
                    disabled=move || !listing.with(ListingState::has_previous)
                    on:click=move |_| go_to(listing.with(|s| s.page.saturating_sub(1)))
                >
                    "Previous"
                </button>
                {move || {
                    let (pages, current) = listing.with(|s| (s.page_numbers(), s.page));
                    pages
                        .into_iter()
                        .map(|page| {
                            let class = if page == current { "btn btn--page btn--active" } else { "btn btn--page" };
                            view! {
                                <button class=class on:click=move |_| go_to(page)>
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="btn"
                    disabled=move || !listing.with(ListingState::has_next)
                    on:click=move |_| go_to(listing.with(|s| s.page + 1))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
