use crate::models::{StageKey, VivaOutcome, VivaStatus, VivaTeamRecord};

fn team(stage: StageKey, status: VivaStatus) -> VivaTeamRecord {
    VivaTeamRecord::new(stage, status)
}

fn passed(stage: StageKey) -> VivaTeamRecord {
    VivaTeamRecord::new(stage, VivaStatus::Completed).with_outcome(VivaOutcome::Pass)
}

fn failed(stage: StageKey) -> VivaTeamRecord {
    VivaTeamRecord::new(stage, VivaStatus::Completed).with_outcome(VivaOutcome::Fail)
}

/// Every record shape the classifier can see for one stage: each status with
/// each outcome, plus records whose status is missing.
fn record_variants(stage: StageKey) -> Vec<VivaTeamRecord> {
    let mut variants = Vec::new();
    for status in VivaStatus::ALL {
        variants.push(team(stage, status));
        variants.push(team(stage, status).with_outcome(VivaOutcome::Pass));
        variants.push(team(stage, status).with_outcome(VivaOutcome::Fail));
    }
    variants.push(VivaTeamRecord {
        stage: Some(stage.into()),
        ..VivaTeamRecord::default()
    });
    variants
}

/// All viva-team sets of up to two records across every stage.
fn generated_sets() -> Vec<Vec<VivaTeamRecord>> {
    let pool: Vec<VivaTeamRecord> = StageKey::ALL
        .into_iter()
        .flat_map(record_variants)
        .collect();

    let mut sets = vec![Vec::new()];
    for first in &pool {
        sets.push(vec![first.clone()]);
        for second in &pool {
            sets.push(vec![first.clone(), second.clone()]);
        }
    }
    sets
}
