use thiserror::Error;

use crate::core::actions::build_palette::ports::palette_function::{
    PaletteFunction, PaletteFunctionError,
};
use crate::core::data::palette_table::PaletteTable;

/// Largest iteration budget a palette table is built for.
pub const MAX_ITERATIONS_LIMIT: u32 = 10_000;

#[derive(Debug, Error)]
pub enum BuildPaletteError {
    #[error("iteration budget {max_iterations} exceeds the limit of {limit}")]
    BudgetTooLarge { max_iterations: u32, limit: u32 },
    #[error("palette function failed at iteration {iteration}: {source}")]
    PaletteFunction {
        iteration: u32,
        #[source]
        source: PaletteFunctionError,
    },
}

/// Evaluates `palette_fn` for every iteration count `0..=max_iterations`.
///
/// Budgets above [`MAX_ITERATIONS_LIMIT`] are rejected before the palette
/// function is called. Stops at the first failure. Nothing is returned on failure, so a table the
/// caller already holds stays untouched.
pub fn build_palette<P>(palette_fn: &P, max_iterations: u32) -> Result<PaletteTable, BuildPaletteError>
where
    P: PaletteFunction + ?Sized,
{
    if max_iterations > MAX_ITERATIONS_LIMIT {
        return Err(BuildPaletteError::BudgetTooLarge {
            max_iterations,
            limit: MAX_ITERATIONS_LIMIT,
        });
    }

    let colours = (0..=max_iterations)
        .map(|iteration| {
            palette_fn
                .colour(iteration, max_iterations)
                .map_err(|source| BuildPaletteError::PaletteFunction { iteration, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PaletteTable::from_colours(colours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::build_palette::ports::palette_function::{
        infallible_palette_fn, palette_fn,
    };
    use crate::core::data::colour::Colour;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn grey(iteration: u32, _: u32) -> Colour {
        let level = (iteration % 256) as u8;
        Colour::new(level, level, level)
    }

    #[test]
    fn test_table_has_one_entry_per_iteration_count() {
        let table = build_palette(&infallible_palette_fn(grey), 10).unwrap();

        assert_eq!(table.len(), 11);
        assert_eq!(table.max_iterations(), 10);
        assert_eq!(table.lookup(10), Colour::new(10, 10, 10));
    }

    #[test]
    fn test_zero_budget_builds_single_entry() {
        let table = build_palette(&infallible_palette_fn(grey), 0).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(0), Colour::BLACK);
    }

    #[test]
    fn test_building_twice_is_deterministic() {
        let palette = infallible_palette_fn(grey);

        assert_eq!(
            build_palette(&palette, 64).unwrap(),
            build_palette(&palette, 64).unwrap()
        );
    }

    #[test]
    fn test_budget_change_keeps_earlier_entries_for_budget_independent_palette() {
        let palette = infallible_palette_fn(grey);
        let small = build_palette(&palette, 20).unwrap();
        let large = build_palette(&palette, 50).unwrap();

        assert_eq!(large.len(), 51);
        assert_eq!(&large.colours()[..21], small.colours());
    }

    #[test]
    fn test_palette_receives_budget() {
        let palette = palette_fn(|iteration, max_iterations| {
            Ok(Colour::new(iteration as u8, max_iterations as u8, 0))
        });
        let table = build_palette(&palette, 7).unwrap();

        assert!(table.colours().iter().all(|colour| colour.g == 7));
        assert_eq!(table.lookup(3).r, 3);
    }

    #[test]
    fn test_failure_reports_iteration_and_stops() {
        let calls = AtomicU32::new(0);
        let palette = palette_fn(|iteration, _| {
            calls.fetch_add(1, Ordering::Relaxed);
            if iteration == 4 {
                return Err("script error".into());
            }
            Ok(Colour::BLACK)
        });

        let result = build_palette(&palette, 100);

        assert!(matches!(
            result,
            Err(BuildPaletteError::PaletteFunction { iteration: 4, .. })
        ));
        assert_eq!(calls.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_budget_limit_is_inclusive() {
        let table = build_palette(&infallible_palette_fn(grey), MAX_ITERATIONS_LIMIT).unwrap();

        assert_eq!(table.len(), 10_001);
    }

    #[test]
    fn test_budget_above_limit_is_rejected_without_calling_palette() {
        let calls = AtomicU32::new(0);
        let palette = infallible_palette_fn(|_, _| {
            calls.fetch_add(1, Ordering::Relaxed);
            Colour::BLACK
        });

        for max_iterations in [MAX_ITERATIONS_LIMIT + 1, u32::MAX] {
            assert!(matches!(
                build_palette(&palette, max_iterations),
                Err(BuildPaletteError::BudgetTooLarge { limit: 10_000, .. })
            ));
        }
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_failure_message() {
        let palette = palette_fn(|_, _| Err("bad colour".into()));
        let err = build_palette(&palette, 3).unwrap_err();

        assert_eq!(
            err.to_string(),
            "palette function failed at iteration 0: bad colour"
        );
    }
}
