//! Statement data: invoices enriched with plays, charges and credits.
//!
//! [`StatementDataBuilder`] turns an [`Invoice`] and a [`PlayCatalog`] into a
//! [`StatementData`], the structure every renderer consumes.
//!
//! # Invariants
//!
//! - `total_amount == sum(performances[i].amount)`
//! - `total_volume_credits == sum(performances[i].volume_credits)`
//!
//! Totals are summed from the finished enriched sequence, never recomputed
//! from the raw performances.

use crate::error::{BillingError, Result};
use crate::invoice::{Invoice, Performance};
use crate::play::{Play, PlayCatalog};
use crate::pricing::PerformanceCalculator;
use log::debug;
use serde::Serialize;

/// A performance with its resolved play and computed charge and credits.
///
/// Owns copies of everything it holds, so later changes to the invoice or
/// catalog it was built from do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPerformance {
    #[serde(rename = "playID")]
    play_id: String,
    audience: u32,
    play: Play,
    amount: u64,
    #[serde(rename = "volumeCredits")]
    volume_credits: u64,
}

impl EnrichedPerformance {
    pub fn play_id(&self) -> &str {
        &self.play_id
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }

    pub fn play(&self) -> &Play {
        &self.play
    }

    /// Charge in cents.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn volume_credits(&self) -> u64 {
        self.volume_credits
    }
}

/// Everything a renderer needs to present one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementData {
    customer: String,
    performances: Vec<EnrichedPerformance>,
    total_amount: u64,
    total_volume_credits: u64,
}

impl StatementData {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Enriched performances, in invoice order.
    pub fn performances(&self) -> &[EnrichedPerformance] {
        &self.performances
    }

    /// Sum of all performance charges, in cents.
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

/// Builds [`StatementData`] from an invoice and a play catalog.
///
/// Holds no state, so one builder can be reused for any number of invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementDataBuilder;

impl StatementDataBuilder {
    pub fn new() -> Self {
        StatementDataBuilder
    }

    /// Enriches every performance of `invoice` in order, then totals them.
    ///
    /// Fails with [`BillingError::UnknownPlay`] or [`BillingError::UnknownGenre`]
    /// on the first performance that cannot be priced. No partial statement is
    /// returned.
    pub fn build(&self, invoice: &Invoice, catalog: &PlayCatalog) -> Result<StatementData> {
        let performances = invoice
            .performances
            .iter()
            .map(|performance| self.enrich(performance, catalog))
            .collect::<Result<Vec<_>>>()?;

        let total_amount: u64 = performances.iter().map(|p| p.amount).sum();
        let total_volume_credits: u64 = performances.iter().map(|p| p.volume_credits).sum();

        debug!(
            "Built statement for {}: {} performances, amount {}, credits {}",
            invoice.customer,
            performances.len(),
            total_amount,
            total_volume_credits
        );

        Ok(StatementData {
            customer: invoice.customer.clone(),
            performances,
            total_amount,
            total_volume_credits,
        })
    }

    fn enrich(
        &self,
        performance: &Performance,
        catalog: &PlayCatalog,
    ) -> Result<EnrichedPerformance> {
        let play = catalog
            .get(&performance.play_id)
            .ok_or_else(|| BillingError::UnknownPlay {
                play_id: performance.play_id.clone(),
            })?;
        let calculator = PerformanceCalculator::new(performance, play)?;

        let enriched = EnrichedPerformance {
            play_id: performance.play_id.clone(),
            audience: performance.audience,
            play: play.clone(),
            amount: calculator.amount(),
            volume_credits: calculator.volume_credits(),
        };
        debug!(
            "Priced {} ({}, {} seats) as {}: amount {}, credits {}",
            enriched.play_id,
            calculator.policy(),
            enriched.audience,
            play.name,
            enriched.amount,
            enriched.volume_credits
        );

        Ok(enriched)
    }
}

/// Builds statement data with a default [`StatementDataBuilder`].
pub fn create_statement_data(invoice: &Invoice, catalog: &PlayCatalog) -> Result<StatementData> {
    StatementDataBuilder::new().build(invoice, catalog)
}
