//! Fan-out/join orchestration of the full stitching pipeline.

use std::sync::Arc;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use futures_util::future;
use uuid::Uuid;

use crate::classify::classify;
use crate::dedupe::dedupe;
use crate::order::{sort_vertically, VerticalOrder};
use crate::overlap::detect_overlaps;
use crate::rank::order_by_rank;
use crate::recognize::TextRecognizer;
use crate::summary::summarize;
use crate::{
    ClassifiedBubble, Message, RecognitionError, RecognitionFailureKind, Snippet, StitchError,
};

/// Knobs for one stitching run.
#[derive(Debug, Clone)]
pub struct StitchSettings {
    /// Upper bound on a single page's recognition call; `None` disables it.
    pub page_timeout: Option<Duration>,
}

impl Default for StitchSettings {
    fn default() -> Self {
        Self {
            page_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Entry point of the pipeline: owns the OCR collaborator and sequences
/// recognition, summarizing, ranking, classification and deduplication.
///
/// Holds no state across calls; one value can serve any number of runs.
pub struct Stitcher {
    recognizer: Arc<dyn TextRecognizer>,
    settings: StitchSettings,
}

impl Stitcher {
    pub fn new(recognizer: Arc<dyn TextRecognizer>, settings: StitchSettings) -> Self {
        Self {
            recognizer,
            settings,
        }
    }

    /// Reconstruct one ordered, de-duplicated transcript from screenshots.
    ///
    /// Every page is recognized concurrently and joined before any ordering
    /// decision, so the result is deterministic regardless of completion
    /// order. A page that fails is dropped from the run; the first recorded
    /// error surfaces only when every page fails. Empty input yields an
    /// empty transcript, not an error.
    pub async fn stitch(&self, images: Vec<Vec<u8>>) -> Result<Vec<Message>, StitchError> {
        if images.is_empty() {
            return Ok(Vec::new());
        }

        let page_count = images.len();
        engine_info!("stitching {page_count} screenshot(s)");

        let results = future::join_all(
            images
                .into_iter()
                .enumerate()
                .map(|(page_index, image)| self.recognize_page(image, page_index)),
        )
        .await;

        let mut pages: Vec<Vec<Snippet>> = vec![Vec::new(); page_count];
        let mut first_error: Option<RecognitionError> = None;
        let mut recognized_pages = 0usize;
        for (page_index, result) in results.into_iter().enumerate() {
            match result {
                Ok(snippets) => {
                    engine_debug!("page {page_index}: {} snippet(s)", snippets.len());
                    pages[page_index] = snippets;
                    recognized_pages += 1;
                }
                Err(error) => {
                    engine_warn!("page {page_index} dropped: {error}");
                    if first_error.is_none() {
                        first_error = Some(error);
                    }
                }
            }
        }

        if recognized_pages == 0 {
            // Input was non-empty, so at least one error was recorded.
            if let Some(error) = first_error {
                return Err(StitchError::AllPagesFailed(error));
            }
        }

        // Failed pages keep empty placeholder summaries so page indices stay
        // positional through overlap detection and ranking.
        let mut summaries: Vec<_> = pages
            .iter()
            .enumerate()
            .map(|(page_index, snippets)| summarize(page_index, snippets))
            .collect();
        detect_overlaps(&mut summaries);
        let ordered = order_by_rank(summaries);

        let mut messages = Vec::new();
        for summary in &ordered {
            engine_debug!("page {} ranked {}", summary.page_index, summary.rank);
            for snippet in sort_vertically(&pages[summary.page_index], VerticalOrder::TopToBottom)
            {
                messages.push(to_message(classify(&snippet)));
            }
        }

        let transcript = dedupe(messages);
        engine_info!("stitched transcript has {} message(s)", transcript.len());
        Ok(transcript)
    }

    async fn recognize_page(
        &self,
        image: Vec<u8>,
        page_index: usize,
    ) -> Result<Vec<Snippet>, RecognitionError> {
        let recognition = self.recognizer.recognize(&image, page_index);
        match self.settings.page_timeout {
            Some(limit) => match tokio::time::timeout(limit, recognition).await {
                Ok(result) => result,
                Err(_) => Err(RecognitionError::new(
                    RecognitionFailureKind::Timeout,
                    format!("page {page_index} exceeded {limit:?}"),
                )),
            },
            None => recognition.await,
        }
    }
}

fn to_message(bubble: ClassifiedBubble) -> Message {
    Message {
        id: Uuid::new_v4(),
        text: bubble.cleaned_text,
        is_from_user: bubble.is_from_user,
        source_page_index: bubble.page_index,
        source_bounding_box: bubble.bounding_box,
        // Provisional; the deduplicator assigns the final dense numbering.
        chronological_index: 0,
        metadata: bubble.metadata,
    }
}
