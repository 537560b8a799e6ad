//! Modal form for listing a new space.
//!
//! Local checks run first (see `FormState::prepare_submit`); only a payload
//! that passes them is posted. Server rejections are mapped back onto the
//! same inputs.

use leptos::prelude::*;
use listings::SpaceType;

use crate::state::form::{FormState, FormValues, number_input};

/// One labelled text input bound to a `FormValues` string field.
#[component]
fn TextField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    get: fn(&FormValues) -> &String,
    set: fn(&mut FormValues, String),
) -> impl IntoView {
    view! {
        <label class="space-form__field">
            <span>{label}</span>
            <input
                type="text"
                name=name
                placeholder=placeholder
                class=("space-form__input--error", move || form.with(|f| f.field_errors.contains_key(name)))
                prop:value=move || form.with(|f| get(&f.values).clone())
                on:input=move |ev| form.update(|f| set(&mut f.values, event_target_value(&ev)))
            />
            <FieldError form=form name=name/>
        </label>
    }
}

/// One labelled price input; `0` means "not offered".
#[component]
fn PriceField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    get: fn(&FormValues) -> f64,
    set: fn(&mut FormValues, f64),
) -> impl IntoView {
    view! {
        <label class="space-form__field">
            <span>{label}</span>
            <input
                type="number"
                name=name
                min="0"
                step="0.01"
                class=("space-form__input--error", move || form.with(|f| f.field_errors.contains_key(name)))
                prop:value=move || form.with(|f| get(&f.values).to_string())
                on:input=move |ev| form.update(|f| set(&mut f.values, number_input(&event_target_value(&ev))))
            />
            <FieldError form=form name=name/>
        </label>
    }
}

#[component]
fn FieldError(form: RwSignal<FormState>, name: &'static str) -> impl IntoView {
    move || {
        form.with(|f| f.field_error(name))
            .map(|msg| view! { <p class="space-form__error">{msg}</p> })
    }
}

#[component]
pub fn SpaceForm(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with(|f| f.submitting) {
            return;
        }
        let Some(payload) = form.try_update(FormState::prepare_submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_space(&payload).await {
                Ok(space) => {
                    log::info!("space created: {}", space.id);
                    form.update(FormState::reset);
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("space create failed: {e}");
                    form.update(|f| f.apply_api_error(&e));
                }
            }
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, on_created);
        }
    };

    let add_amenity = move || form.update(FormState::add_amenity);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog space-form" on:click=move |ev| ev.stop_propagation()>
                <header class="space-form__header">
                    <h2>"List Your Space"</h2>
                    <button class="btn btn--icon" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>

                {move || {
                    form.with(|f| f.general_error.clone())
                        .map(|msg| view! { <div class="space-form__banner" role="alert">{msg}</div> })
                }}

                <form on:submit=submit>
                    <TextField form=form name="title" label="Title *" placeholder="e.g., Spacious Garage in Downtown"
                        get=|v| &v.title set=|v, s| v.title = s/>

                    <label class="space-form__field">
                        <span>"Description *"</span>
                        <textarea
                            name="description"
                            rows="4"
                            placeholder="Describe your space, its features, and what makes it special..."
                            class=("space-form__input--error", move || form.with(|f| f.field_errors.contains_key("description")))
                            prop:value=move || form.with(|f| f.values.description.clone())
                            on:input=move |ev| form.update(|f| f.values.description = event_target_value(&ev))
                        ></textarea>
                        <FieldError form=form name="description"/>
                    </label>

                    <div class="space-form__row">
                        <label class="space-form__field">
                            <span>"Space Type *"</span>
                            <select
                                name="space_type"
                                on:change=move |ev| {
                                    let kind = SpaceType::parse(&event_target_value(&ev)).unwrap_or_default();
                                    form.update(|f| f.values.space_type = kind);
                                }
                            >
                                {SpaceType::ALL
                                    .into_iter()
                                    .map(|kind| {
                                        view! {
                                            <option
                                                value=kind.as_str()
                                                selected=move || form.with(|f| f.values.space_type == kind)
                                            >
                                                {kind.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                            <FieldError form=form name="space_type"/>
                        </label>
                        <TextField form=form name="location" label="Location *" placeholder="e.g., Downtown, Near University"
                            get=|v| &v.location set=|v, s| v.location = s/>
                    </div>

                    <TextField form=form name="address" label="Address *" placeholder="Street address"
                        get=|v| &v.address set=|v, s| v.address = s/>

                    <div class="space-form__row">
                        <TextField form=form name="city" label="City *" get=|v| &v.city set=|v, s| v.city = s/>
                        <TextField form=form name="state" label="State *" get=|v| &v.state set=|v, s| v.state = s/>
                        <TextField form=form name="zip_code" label="ZIP Code *"
                            get=|v| &v.zip_code set=|v, s| v.zip_code = s/>
                    </div>

                    <fieldset class="space-form__pricing">
                        <legend>"Pricing (choose one) *"</legend>
                        <PriceField form=form name="price_per_hour" label="Per Hour ($)"
                            get=|v| v.price_per_hour set=|v, n| v.price_per_hour = n/>
                        <PriceField form=form name="price_per_day" label="Per Day ($)"
                            get=|v| v.price_per_day set=|v, n| v.price_per_day = n/>
                        <PriceField form=form name="price_per_week" label="Per Week ($)"
                            get=|v| v.price_per_week set=|v, n| v.price_per_week = n/>
                        <PriceField form=form name="price_per_month" label="Per Month ($)"
                            get=|v| v.price_per_month set=|v, n| v.price_per_month = n/>
                    </fieldset>

                    <div class="space-form__row">
                        <label class="space-form__field">
                            <span>"Area (sq ft)"</span>
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form.with(|f| f.values.area_sqft.to_string())
                                on:input=move |ev| form.update(|f| f.values.area_sqft = number_input(&event_target_value(&ev)))
                            />
                            <FieldError form=form name="area_sqft"/>
                        </label>
                        <label class="space-form__field">
                            <span>"Max Capacity"</span>
                            <input
                                type="number"
                                min="1"
                                prop:value=move || form.with(|f| f.values.max_capacity.to_string())
                                on:input=move |ev| form.update(|f| f.values.max_capacity = number_input(&event_target_value(&ev)))
                            />
                            <FieldError form=form name="max_capacity"/>
                        </label>
                    </div>

                    <div class="space-form__field">
                        <span>"Amenities"</span>
                        <div class="space-form__amenity-input">
                            <input
                                type="text"
                                placeholder="e.g., Electricity, Security Camera"
                                prop:value=move || form.with(|f| f.amenity_input.clone())
                                on:input=move |ev| form.update(|f| f.amenity_input = event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_amenity();
                                    }
                                }
                            />
                            <button class="btn" type="button" on:click=move |_| add_amenity()>"Add"</button>
                        </div>
                        <ul class="space-form__amenities">
                            {move || {
                                form.with(|f| f.values.amenities.clone())
                                    .into_iter()
                                    .map(|amenity| {
                                        let name = amenity.clone();
                                        view! {
                                            <li class="amenity-tag">
                                                {amenity}
                                                <button
                                                    type="button"
                                                    title="Remove"
                                                    on:click=move |_| form.update(|f| f.remove_amenity(&name))
                                                >
                                                    "×"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>

                    <div class="space-form__row">
                        <label class="space-form__field">
                            <span>"Available From"</span>
                            <input
                                type="datetime-local"
                                prop:value=move || form.with(|f| f.values.available_from.clone())
                                on:input=move |ev| form.update(|f| f.values.available_from = event_target_value(&ev))
                            />
                            <FieldError form=form name="available_from"/>
                        </label>
                        <label class="space-form__field">
                            <span>"Available Until"</span>
                            <input
                                type="datetime-local"
                                prop:value=move || form.with(|f| f.values.available_until.clone())
                                on:input=move |ev| form.update(|f| f.values.available_until = event_target_value(&ev))
                            />
                            <FieldError form=form name="available_until"/>
                        </label>
                    </div>

                    <label class="space-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.values.is_available)
                            on:change=move |ev| form.update(|f| f.values.is_available = event_target_checked(&ev))
                        />
                        "Available for rent"
                    </label>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                            {move || if form.with(|f| f.submitting) { "Creating..." } else { "Create Space" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
