//! Card component for one listing in the grid.

use leptos::prelude::*;
use listings::Space;

use crate::util::format;

#[component]
pub fn SpaceCard(space: Space) -> impl IntoView {
    let (amenities, more) = format::amenity_preview(&space.amenities);
    let amenities = amenities.to_vec();
    let price = format::price_parts(&space);
    let window = format::availability_window(space.available_from, space.available_until);
    let badge_class = if space.is_available {
        "space-card__badge space-card__badge--available"
    } else {
        "space-card__badge space-card__badge--unavailable"
    };
    let photo = space.photos.first().cloned();

    view! {
        <article class="space-card">
            <div class="space-card__image">
                {photo.map(|src| view! { <img src=src alt=space.title.clone()/> })}
                <span class=badge_class>{format::availability_label(space.is_available)}</span>
                <span class="space-card__type">{space.space_type.label()}</span>
            </div>
            <div class="space-card__body">
                <h3 class="space-card__title">{space.title.clone()}</h3>
                <p class="space-card__location">{format!("{}, {}", space.city, space.state)}</p>
                <p class="space-card__description">{space.description.clone()}</p>

                <div class="space-card__details">
                    {space.area_sqft.map(|sqft| view! { <span>{format::format_area(sqft)}</span> })}
                    {space.max_capacity.map(|cap| view! { <span>{format::format_capacity(cap)}</span> })}
                </div>

                {(!amenities.is_empty())
                    .then(|| {
                        view! {
                            <ul class="space-card__amenities">
                                {amenities
                                    .into_iter()
                                    .map(|amenity| view! { <li class="amenity-tag">{amenity}</li> })
                                    .collect::<Vec<_>>()}
                                {more.map(|label| view! { <li class="amenity-tag amenity-tag--more">{label}</li> })}
                            </ul>
                        }
                    })}

                {window.map(|text| view! { <p class="space-card__window">{text}</p> })}

                <div class="space-card__pricing">
                    {price.map(|(amount, unit)| {
                        view! {
                            <span class="space-card__price">{amount}</span>
                            <span class="space-card__unit">{unit}</span>
                        }
                    })}
                </div>
            </div>
        </article>
    }
}
