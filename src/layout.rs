use yew::prelude::*;

pub const TITLE: &str = "DevOps Assessment - Next.js App";
pub const DESCRIPTION: &str = "Containerized Next.js application deployed with Docker and Kubernetes";

/// Served by the hosting surface at this path.
pub const STYLESHEET_HREF: &str = "/globals.css";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Document shell shared by every page: head metadata plus the body container.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <html lang="en">
          <head>
            <meta charset="utf-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <title>{ TITLE }</title>
            <meta name="description" content={DESCRIPTION} />
            <link rel="stylesheet" href={STYLESHEET_HREF} />
          </head>
          <body>
            { for props.children.iter() }
          </body>
        </html>
    }
}
