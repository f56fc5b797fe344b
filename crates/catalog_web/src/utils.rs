//! Various utility functions.

use leptos::{prelude::*, IntoView};

/// Generic error fallback view.
pub fn errors_fallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let errors = errors.get_untracked().into_iter().collect::<Vec<_>>();
    if errors.len() == 1 {
        let (_, error) = &errors[0];
        view! {
            <div class="notification is-danger">{format!("{error}")}</div>
        }
        .into_any()
    } else {
        let errors = errors
            .into_iter()
            .map(|(_, err)| {
                view! { <li>{format!("Error: {err}")}</li> }
            })
            .collect_view();

        view! {
            <div class="content">
                <div>"Errors"</div>
                <ul>
                    {errors}
                </ul>
            </div>
        }
        .into_any()
    }
}
