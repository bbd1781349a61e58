//! Adoption card list
//!
//! Fetches the pet list, then appends one card per valid record to the
//! container in document order. An empty list reveals the "no pets" notice
//! instead. Entries that fail validation are logged and skipped; document
//! level failures stop the run and leave already appended cards in place.

use serde::Serialize;

use crate::config::ShowcaseConfig;
use crate::dom::DomHost;
use crate::errors::{RenderError, ShowcaseError};
use crate::fetch::DataSource;
use crate::models::AnimalRecord;
use crate::parse::{parse_pet_list, PetEntry, PetList};
use crate::renderers::{image_for, CardOptions, CardTemplate, ImageSelector};

/// An entry that produced no card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub position: usize,
    pub tag: String,
    pub reason: String,
}

/// What one render run did
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    /// Entries in the collection, valid or not
    pub total: usize,

    /// Cards appended to the container
    pub rendered: usize,

    pub skipped: Vec<SkippedRecord>,

    /// The collection was empty and the notice was shown
    pub empty: bool,
}

pub struct PetListRenderer<S: ImageSelector> {
    pets_url: String,
    container_id: String,
    notice_id: String,
    notice_display: String,
    options: CardOptions,
    selector: S,
}

impl<S: ImageSelector> PetListRenderer<S> {
    pub fn new(config: &ShowcaseConfig, selector: S) -> Self {
        Self {
            pets_url: config.pets_url.clone(),
            container_id: config.pets_container_id.clone(),
            notice_id: config.no_pets_message_id.clone(),
            notice_display: config.no_pets_display.clone(),
            options: config.card_options(),
            selector,
        }
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Fetch the pet list and render it into the page.
    ///
    /// Failures are logged before being returned.
    pub async fn run<D, H>(&mut self, source: &D, dom: &H) -> Result<RenderReport, ShowcaseError>
    where
        D: DataSource,
        H: DomHost + ?Sized,
    {
        let fetched = source.fetch_text(&self.pets_url).await;
        let result = match fetched {
            Ok(xml) => self.render_document(&xml, dom),
            Err(err) => Err(err.into()),
        };

        if let Err(err) = &result {
            log::error!("Error: {}", err);
        }
        result
    }

    /// Parse a pet list document and render it into the page
    pub fn render_document<H: DomHost + ?Sized>(
        &mut self,
        xml: &str,
        dom: &H,
    ) -> Result<RenderReport, ShowcaseError> {
        let list = parse_pet_list(xml)?;
        self.render_list(&list, dom)
    }

    /// Render an already parsed pet list into the page
    pub fn render_list<H: DomHost + ?Sized>(
        &mut self,
        list: &PetList,
        dom: &H,
    ) -> Result<RenderReport, ShowcaseError> {
        let mut report = RenderReport {
            total: list.len(),
            ..RenderReport::default()
        };

        if list.is_empty() {
            dom.set_display(&self.notice_id, &self.notice_display)?;
            report.empty = true;
            log::info!("No pets listed, showing #{}", self.notice_id);
            return Ok(report);
        }

        let template = CardTemplate::compile()?;

        for entry in &list.entries {
            match &entry.record {
                Ok(record) => {
                    let card = self.render_card(&template, record)?;
                    dom.append_html(&self.container_id, &card)?;
                    report.rendered += 1;
                }
                Err(_) => report.skipped.push(skip(entry)),
            }
        }

        log::info!(
            "Rendered {} of {} pets into #{}",
            report.rendered,
            report.total,
            self.container_id
        );
        Ok(report)
    }

    /// Card markup for every valid record, without touching the page
    pub fn render_cards(&mut self, list: &PetList) -> Result<Vec<String>, RenderError> {
        let template = CardTemplate::compile()?;

        let mut cards = Vec::with_capacity(list.len());
        for entry in &list.entries {
            match &entry.record {
                Ok(record) => cards.push(self.render_card(&template, record)?),
                Err(_) => {
                    skip(entry);
                }
            }
        }
        Ok(cards)
    }

    fn render_card(
        &mut self,
        template: &CardTemplate,
        record: &AnimalRecord,
    ) -> Result<String, RenderError> {
        let image = image_for(record.category, &mut self.selector);
        log::debug!("Card for {} '{}' uses {}", record.category, record.name, image);
        template.render_record(record, image, &self.options)
    }
}

/// Log a rejected entry and describe it for the report
fn skip(entry: &PetEntry) -> SkippedRecord {
    let reason = match &entry.record {
        Err(err) => err.to_string(),
        Ok(_) => String::new(),
    };
    log::warn!("Skipping pet #{} <{}>: {}", entry.position, entry.tag, reason);

    SkippedRecord {
        position: entry.position,
        tag: entry.tag.clone(),
        reason,
    }
}
