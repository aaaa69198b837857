//! Dedicated soil analysis page.

use leptos::prelude::*;

use crate::components::analysis_result::AnalysisResult;
use crate::components::upload_panel::UploadPanel;

#[component]
pub fn AnalyzePage() -> impl IntoView {
    view! {
        <div class="analyze-page">
            <h1>"Soil analysis"</h1>
            <UploadPanel/>
            <AnalysisResult/>
        </div>
    }
}
