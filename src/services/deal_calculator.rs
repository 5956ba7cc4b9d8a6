use chrono::Utc;

use crate::models::calculation::{CalculationInput, CalculationResult};

/// Compute deal metrics for a property.
///
/// `transaction_cost` and `investor_roi` scale ARV by `(1 - pct/100)`, so a
/// higher percentage yields a lower term. MAO depends on this exact formula.
pub fn compute(input: CalculationInput) -> CalculationResult {
    let CalculationInput {
        address,
        square_feet,
        arv,
        transaction_percent,
        investor_roi_percent,
        rehab_ppsf,
        wholesale_fee,
    } = input;

    let transaction_cost = arv * (1.0 - transaction_percent / 100.0);
    let investor_roi = arv * (1.0 - investor_roi_percent / 100.0);
    let rehab_cost = rehab_ppsf * square_feet;
    let mao = arv - transaction_cost - investor_roi - rehab_cost - wholesale_fee;
    let buyer_entry_fee = mao + wholesale_fee;

    let total_costs = transaction_cost + investor_roi + rehab_cost;
    let profit_margin = if arv > 0.0 { (mao / arv) * 100.0 } else { 0.0 };
    let cost_per_sqft = if square_feet > 0.0 {
        total_costs / square_feet
    } else {
        0.0
    };

    tracing::debug!(
        "Computed deal for '{}': arv={}, mao={}, buyer_entry_fee={}",
        address,
        arv,
        mao,
        buyer_entry_fee
    );

    CalculationResult {
        address,
        square_feet,
        arv,
        transaction_percent,
        investor_roi_percent,
        rehab_ppsf,
        transaction_cost,
        investor_roi,
        rehab_cost,
        mao,
        wholesale_fee,
        buyer_entry_fee,
        total_costs,
        profit_margin,
        cost_per_sqft,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn sample_input() -> CalculationInput {
        CalculationInput {
            address: "12 Elm St".to_string(),
            square_feet: 1000.0,
            arv: 200000.0,
            transaction_percent: 5.0,
            investor_roi_percent: 20.0,
            rehab_ppsf: 20.0,
            wholesale_fee: 5000.0,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = compute(sample_input());

        assert_close(result.transaction_cost, 190000.0);
        assert_close(result.investor_roi, 160000.0);
        assert_close(result.rehab_cost, 20000.0);
        assert_close(result.mao, -175000.0);
        assert_close(result.buyer_entry_fee, -170000.0);
        assert_close(result.total_costs, 370000.0);
        assert_close(result.profit_margin, -87.5);
        assert_close(result.cost_per_sqft, 370.0);
    }

    #[test]
    fn test_result_echoes_inputs() {
        let result = compute(sample_input());
        assert_eq!(result.address, "12 Elm St");
        assert_eq!(result.square_feet, 1000.0);
        assert_eq!(result.arv, 200000.0);
        assert_eq!(result.transaction_percent, 5.0);
        assert_eq!(result.investor_roi_percent, 20.0);
        assert_eq!(result.rehab_ppsf, 20.0);
        assert_eq!(result.wholesale_fee, 5000.0);
    }

    #[test]
    fn test_higher_percent_lowers_cost_term() {
        // (1 - pct/100) scaling: raising the percentage shrinks the term
        let mut low = sample_input();
        low.transaction_percent = 5.0;
        let mut high = sample_input();
        high.transaction_percent = 10.0;

        assert!(compute(high).transaction_cost < compute(low).transaction_cost);
    }

    #[test]
    fn test_components_sum_to_arv() {
        let inputs = [
            (1000.0, 200000.0, 5.0, 20.0, 20.0, 5000.0),
            (1850.0, 315000.0, 8.5, 12.0, 35.5, 12500.0),
            (0.0, 90000.0, 0.0, 100.0, 0.0, 0.0),
            (2400.0, 0.0, 3.0, 15.0, 42.0, 7500.0),
            (640.0, 1.0e6, 150.0, -10.0, 18.25, 250.0),
        ];

        for (square_feet, arv, tp, roi, ppsf, fee) in inputs {
            let r = compute(CalculationInput {
                address: String::new(),
                square_feet,
                arv,
                transaction_percent: tp,
                investor_roi_percent: roi,
                rehab_ppsf: ppsf,
                wholesale_fee: fee,
            });

            let sum = r.mao + r.transaction_cost + r.investor_roi + r.rehab_cost + r.wholesale_fee;
            assert!((sum - arv).abs() < 1e-6 * arv.abs().max(1.0), "sum {} != arv {}", sum, arv);
            assert!((r.buyer_entry_fee - r.wholesale_fee - r.mao).abs() < 1e-6 * arv.abs().max(1.0));
        }
    }

    #[test]
    fn test_zero_arv_gives_zero_profit_margin() {
        let mut input = sample_input();
        input.arv = 0.0;
        let result = compute(input);
        assert_eq!(result.profit_margin, 0.0);
    }

    #[test]
    fn test_zero_square_feet_gives_zero_cost_per_sqft() {
        let mut input = sample_input();
        input.square_feet = 0.0;
        let result = compute(input);
        assert_eq!(result.cost_per_sqft, 0.0);
        assert_eq!(result.rehab_cost, 0.0);
    }

    #[test]
    fn test_negative_arv_gives_zero_profit_margin() {
        let mut input = sample_input();
        input.arv = -1000.0;
        assert_eq!(compute(input).profit_margin, 0.0);
    }

    #[test]
    fn test_deterministic_apart_from_timestamp() {
        let a = compute(sample_input());
        let b = compute(sample_input());

        assert_eq!(a.transaction_cost, b.transaction_cost);
        assert_eq!(a.investor_roi, b.investor_roi);
        assert_eq!(a.rehab_cost, b.rehab_cost);
        assert_eq!(a.mao, b.mao);
        assert_eq!(a.buyer_entry_fee, b.buyer_entry_fee);
        assert_eq!(a.total_costs, b.total_costs);
        assert_eq!(a.profit_margin, b.profit_margin);
        assert_eq!(a.cost_per_sqft, b.cost_per_sqft);
        assert!(b.timestamp >= a.timestamp);
    }
}
