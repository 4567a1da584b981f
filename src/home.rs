use yew::prelude::*;

use crate::view::PageView;

#[derive(Debug, Clone, PartialEq)]
struct Feature {
    title: &'static str,
    blurb: &'static str,
    accent: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "🐳 Docker",
        blurb: "Multi-stage Dockerfile with optimized layers and minimal image size",
        accent: "blue",
    },
    Feature {
        title: "⚙️ GitHub Actions",
        blurb: "Automated CI/CD pipeline with GHCR integration",
        accent: "purple",
    },
    Feature {
        title: "☸️ Kubernetes",
        blurb: "Deployment manifests with health checks and service configuration",
        accent: "green",
    },
    Feature {
        title: "📚 Documentation",
        blurb: "Complete setup and deployment instructions",
        accent: "orange",
    },
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub view: PageView,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let view = &props.view;

    html! {
        <main class="screen">
          <div class="container">
            <div class="sheet">
              <div class="hero">
                <h1 class="h1">{ "🚀 DevOps Assessment" }</h1>
                <p class="sub">{ "Containerized Next.js Application" }</p>
              </div>

              <div class="grid">
                { for FEATURES.iter().map(|f| html! {
                    <div class={classes!("card", f.accent)}>
                      <h2 class="card-t">{ f.title }</h2>
                      <p class="card-p">{ f.blurb }</p>
                    </div>
                })}
              </div>

              <div class="panel">
                <h3 class="panel-t">{ "System Information" }</h3>
                <div class="kv">
                  <p><strong>{ "Status:" }</strong>{ " " }<span class="ok">{ "✓ Running" }</span></p>
                  <p><strong>{ "Environment:" }</strong>{ " " }{ view.environment.clone() }</p>
                  <p><strong>{ "Next.js Version:" }</strong>{ " " }{ view.version_label.clone() }</p>
                  <p><strong>{ "Build Time:" }</strong>{ " " }{ view.build_time.clone() }</p>
                </div>
              </div>

              <div class="footer">
                <p class="small">{ "Built with ❤️ for DevOps Assessment" }</p>
              </div>
            </div>
          </div>
        </main>
    }
}
