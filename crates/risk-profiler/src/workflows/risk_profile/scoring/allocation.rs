use super::super::domain::{
    AllocationLimits, AlternativeScope, AlternativesSettings, CapacityBand, GateReason, RiskBand,
    WithdrawalLikelihood,
};

/// Caps the attitude band at the capacity ceiling. Capacity can only pull toward caution.
pub(crate) fn reconcile_bands(attitude_band: RiskBand, ceiling: RiskBand) -> (RiskBand, bool) {
    let final_band = attitude_band.min(ceiling);
    (final_band, final_band != attitude_band)
}

pub(crate) struct GateSignals {
    pub withdrawal_need: WithdrawalLikelihood,
    pub capacity_band: CapacityBand,
    pub limited_experience_gate: bool,
    pub limited_experience: bool,
}

/// Gate reasons in reporting order: liquidity, capacity, experience.
pub(crate) fn gate_reasons(signals: &GateSignals) -> Vec<GateReason> {
    let mut reasons = Vec::new();

    if signals.withdrawal_need.needs_liquidity_soon() {
        reasons.push(GateReason::LiquidityNeed);
    }
    if signals.capacity_band == CapacityBand::Low {
        reasons.push(GateReason::LowCapacity);
    }
    if signals.limited_experience_gate && signals.limited_experience {
        reasons.push(GateReason::LimitedExperience);
    }

    reasons
}

/// Zeroes alternatives when any gate fired and moves the removed share into sukuk.
pub(crate) fn apply_gates(base: AllocationLimits, reasons: &[GateReason]) -> AllocationLimits {
    if reasons.is_empty() {
        return base;
    }

    let removed = base.max_alternatives;
    AllocationLimits {
        max_equity: base.max_equity,
        max_sukuk: base.max_sukuk.saturating_add(removed).min(100),
        max_alternatives: 0,
    }
}

pub(crate) fn alternatives_in_scope(settings: &AlternativesSettings) -> Vec<AlternativeScope> {
    [
        (settings.alt_scope_reits, AlternativeScope::PublicReits),
        (settings.alt_scope_commodities, AlternativeScope::CommodityFunds),
        (
            settings.alt_equities_toggle,
            AlternativeScope::AlternativeLikeEquities,
        ),
    ]
    .into_iter()
    .filter_map(|(enabled, scope)| enabled.then_some(scope))
    .collect()
}
