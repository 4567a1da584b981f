use tracing::debug;
use yew::prelude::*;
use yew::ServerRenderer;

use crate::home::Home;
use crate::layout::Layout;
use crate::view::PageView;

const DOCTYPE: &str = "<!DOCTYPE html>";

#[derive(Properties, PartialEq)]
pub struct DocumentProps {
    pub view: PageView,
}

#[function_component(Document)]
pub fn document(props: &DocumentProps) -> Html {
    html! {
        <Layout>
          <Home view={props.view.clone()} />
        </Layout>
    }
}

/// Renders the full HTML document for `view`.
pub async fn render_document(view: PageView) -> String {
    debug!(environment = %view.environment, build_time = %view.build_time, "rendering page");

    let body = ServerRenderer::<Document>::with_props(move || DocumentProps { view })
        .hydratable(false)
        .render()
        .await;

    format!("{DOCTYPE}\n{body}")
}

/// Captures a fresh view model and renders it.
pub async fn render_page() -> String {
    render_document(PageView::capture()).await
}
