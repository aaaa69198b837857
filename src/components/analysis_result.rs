//! Soil analysis result card.

use leptos::prelude::*;

use crate::state::upload::UploadState;

/// Element id of the result card, used as a scroll target when a
/// historical analysis is opened.
pub const RESULT_ELEMENT_ID: &str = "analysis-result";

/// Renders the most recent analysis (fresh upload or a historical record
/// opened from the list). Hidden while there is nothing to show.
#[component]
pub fn AnalysisResult() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();

    view! {
        <div id=RESULT_ELEMENT_ID class="analysis-result">
            {move || {
                upload.get().result.map(|record| {
                    view! {
                        <div class="analysis-result__card">
                            <h2>"Analysis result"</h2>
                            <p class="analysis-result__type">{record.soil_type.clone()}</p>
                            <p class="analysis-result__confidence">
                                "Confidence: " {record.confidence_percent()} "%"
                            </p>
                            <h3>"Description"</h3>
                            <p>{record.description.clone()}</p>
                            <h3>"Characteristics"</h3>
                            <p>{record.characteristics.clone()}</p>
                            <h3>"Recommended crops"</h3>
                            <p>{record.recommended_crops.clone()}</p>
                            <h3>"Recommendations"</h3>
                            <p>{record.recommendations.clone()}</p>
                        </div>
                    }
                })
            }}
        </div>
    }
}
