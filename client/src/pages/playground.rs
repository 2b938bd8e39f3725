//! Component playground: icon gallery, illustration, survey widget.

use haven_icons::IconRegistry;
use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::illustration::Illustration;
use crate::components::survey_widget::SurveyWidget;

const SWATCHES: &[Option<&str>] = &[None, Some("#6bbf8e"), Some("#7b61ff")];

#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let rows = IconRegistry::bundled()
        .descriptors()
        .into_iter()
        .map(|d| (d.name().to_owned(), d.sizes().collect::<Vec<_>>()))
        .collect::<Vec<_>>();

    view! {
        <div class="playground">
            <header class="playground__header">
                <Illustration file="welcome" alt="Two people talking on a bench" width=240/>
                <h1>"Haven components"</h1>
                <a class="playground__link" href="/matching">
                    "Open matching prototype "
                    <Icon name="arrow-right" size=16/>
                </a>
            </header>
            <table class="icon-gallery">
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(name, sizes)| {
                            view! {
                                <tr>
                                    <th scope="row">{name.clone()}</th>
                                    {sizes
                                        .into_iter()
                                        .flat_map(|size| SWATCHES.iter().map(move |c| (size, *c)))
                                        .map(|(size, color)| {
                                            let icon = match color {
                                                Some(color) => view! { <Icon name=name.clone() size=size color=color/> }.into_any(),
                                                None => view! { <Icon name=name.clone() size=size/> }.into_any(),
                                            };
                                            view! { <td title=format!("{size}px")>{icon}</td> }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <SurveyWidget context="playground"/>
        </div>
    }
}
