//! 首页

use crate::components::icons::{Heart, PawPrint};
use crate::data::use_data;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let data = use_data();
    let router = use_router();

    // 统计数据的派生值
    let active_reports = move || data.posts().iter().filter(|p| !p.is_reunited()).count();
    let reunited_count = move || data.posts().iter().filter(|p| p.is_reunited()).count();
    let org_count = move || data.organizations().len();
    let event_count = move || data.events().len();

    view! {
        <div class="hero bg-gradient-to-br from-primary/10 to-secondary/10 py-16">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <div class="flex justify-center mb-4">
                        <div class="p-4 bg-primary/10 rounded-2xl text-primary">
                            <PawPrint attr:class="h-12 w-12" />
                        </div>
                    </div>
                    <h1 class="text-4xl font-bold">"Hearts for Paws"</h1>
                    <p class="py-4 text-base-content/70">
                        "Report lost and found pets, support local rescues, and connect with the pet community around you."
                    </p>
                    <div class="flex justify-center gap-3">
                        <button class="btn btn-primary gap-2" on:click=move |_| router.navigate("/lost-and-found")>
                            <PawPrint attr:class="h-5 w-5" /> "Lost & Found"
                        </button>
                        <button class="btn btn-secondary btn-outline gap-2" on:click=move |_| router.navigate("/donations")>
                            <Heart attr:class="h-5 w-5" /> "Support a Rescue"
                        </button>
                    </div>
                </div>
            </div>
        </div>

        <div class="max-w-5xl mx-auto px-4 py-8">
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Active Reports"</div>
                    <div class="stat-value text-primary">{active_reports}</div>
                    <div class="stat-desc">"lost & found pets"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Reunited"</div>
                    <div class="stat-value text-success">{reunited_count}</div>
                    <div class="stat-desc">"happy endings"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Rescues & Shelters"</div>
                    <div class="stat-value text-secondary">{org_count}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Community Events"</div>
                    <div class="stat-value">{event_count}</div>
                </div>
            </div>
        </div>
    }
}
