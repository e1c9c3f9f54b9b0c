use leptos::{component, create_local_resource, view, IntoView, Signal, SignalGet};
use shared::{
    model::Plan,
    plans::{fetch_plans, PlansState},
    table::QuotaDisplay,
};
use tracing::{debug, error};

use crate::{
    api::{fetch_admin_config, HttpPlanStore},
    components::PlanTable,
};

/// Read the ui config then every plan in the configured collection
async fn load_plans() -> Result<(QuotaDisplay, Vec<Plan>), String> {
    let result = async {
        let config = fetch_admin_config().await.map_err(|e| e.to_string())?;
        let plans = fetch_plans(&HttpPlanStore, &config.plans_collection)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((config.quota_display, plans))
    }
    .await;

    match &result {
        Ok((_, plans)) => debug!(count = plans.len(), "Loaded plans"),
        Err(e) => error!("Loading plans failed: {e}"),
    }
    result
}

/// Lists the pricing plans. Fetches once per mount
#[component]
pub fn PlansPanel() -> impl IntoView {
    // Owned by the panel, a result that lands after unmount goes nowhere
    let loaded = create_local_resource(|| (), |_| load_plans());

    let state = Signal::derive(move || {
        PlansState::from_fetch(loaded.get().map(|result| result.map(|(_, plans)| plans)))
    });

    let quota_display = Signal::derive(move || match loaded.get() {
        Some(Ok((display, _))) => display,
        _ => QuotaDisplay::default(),
    });

    view! {
        <h2>"Plans"</h2>
        <PlanTable state=state quota_display=quota_display/>
    }
}
