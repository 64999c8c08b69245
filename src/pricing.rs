//! Genre-specific pricing and volume credit rules.
//!
//! Each genre with a price list is one [`PricingPolicy`] variant. Policies are
//! resolved from a play's genre tag with [`PricingPolicy::for_genre`], which
//! fails immediately for tags without a variant. A [`PerformanceCalculator`]
//! binds a resolved policy to one performance and its play.

use crate::error::{BillingError, Result};
use crate::invoice::Performance;
use crate::play::Play;
use std::fmt;

/// Audience size above which every genre starts earning volume credits.
const CREDIT_THRESHOLD: u32 = 30;

/// Pricing policy for one genre.
///
/// All amounts are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingPolicy {
    /// $400 flat, plus $10 per seat above 30.
    Tragedy,

    /// $300 flat plus $3 per seat, with a $100 surcharge and $5 per seat above 20.
    /// Earns one extra credit for every five attendees.
    Comedy,
}

impl PricingPolicy {
    /// Every registered policy, in no particular order.
    pub const ALL: [PricingPolicy; 2] = [PricingPolicy::Tragedy, PricingPolicy::Comedy];

    /// Resolves the policy responsible for a genre tag.
    ///
    /// Tags are matched exactly. Fails with [`BillingError::UnknownGenre`]
    /// carrying the tag when no policy is registered for it.
    pub fn for_genre(genre: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.genre() == genre)
            .ok_or_else(|| BillingError::UnknownGenre {
                genre: genre.to_string(),
            })
    }

    /// The genre tag this policy prices.
    pub fn genre(&self) -> &'static str {
        match self {
            PricingPolicy::Tragedy => "tragedy",
            PricingPolicy::Comedy => "comedy",
        }
    }

    /// Charge for a performance, in cents.
    pub fn amount(&self, performance: &Performance) -> u64 {
        let audience = u64::from(performance.audience);
        match self {
            PricingPolicy::Tragedy => {
                let mut result = 40_000;
                if audience > 30 {
                    result += 1_000 * (audience - 30);
                }
                result
            }
            PricingPolicy::Comedy => {
                let mut result = 30_000;
                if audience > 20 {
                    result += 10_000 + 500 * (audience - 20);
                }
                result + 300 * audience
            }
        }
    }

    /// Volume credits earned by a performance.
    pub fn volume_credits(&self, performance: &Performance) -> u64 {
        let base = base_volume_credits(performance);
        match self {
            PricingPolicy::Tragedy => base,
            PricingPolicy::Comedy => base + u64::from(performance.audience / 5),
        }
    }
}

impl fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.genre())
    }
}

/// Credits shared by every genre: one per attendee above the threshold.
pub fn base_volume_credits(performance: &Performance) -> u64 {
    u64::from(performance.audience.saturating_sub(CREDIT_THRESHOLD))
}

/// A pricing policy bound to a single performance and the play it stages.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceCalculator<'a> {
    performance: &'a Performance,
    play: &'a Play,
    policy: PricingPolicy,
}

impl<'a> PerformanceCalculator<'a> {
    /// Resolves the policy for `play`'s genre and binds it to `performance`.
    pub fn new(performance: &'a Performance, play: &'a Play) -> Result<Self> {
        let policy = PricingPolicy::for_genre(&play.genre)?;
        Ok(PerformanceCalculator {
            performance,
            play,
            policy,
        })
    }

    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    pub fn play(&self) -> &'a Play {
        self.play
    }

    pub fn amount(&self) -> u64 {
        self.policy.amount(self.performance)
    }

    pub fn volume_credits(&self) -> u64 {
        self.policy.volume_credits(self.performance)
    }
}
