//! Column sets and shape of the built-in municipalities

use crate::assembler::DatasetAssembler;
use crate::config::presets::{la_possession, saint_denis};
use crate::config::GenerationConfig;
use crate::model::{MetricCategory, columns::*};
use crate::noise::Silent;
use crate::simulation::generate_seeded;
use crate::years::YearAxis;

const SHARED: [&str; 15] = [
    POPULATION,
    MENAGES,
    RECETTES_TOTALES,
    IMPOTS_LOCAUX,
    DOTATIONS_ETAT,
    AUTRES_RECETTES,
    DEPENSES_TOTALES,
    FONCTIONNEMENT,
    INVESTISSEMENT,
    CHARGE_DETTE,
    PERSONNEL,
    EPARGNE_BRUTE,
    DETTE_TOTALE,
    TAUX_ENDETTEMENT,
    TAUX_FISCALITE,
];

fn strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

#[test]
fn test_la_possession_columns() {
    let dataset = generate_seeded(&la_possession(), &GenerationConfig::default(), 42).unwrap();

    let mut expected = vec![ANNEE];
    expected.extend(SHARED);
    expected.extend([
        INVESTISSEMENT_EQUIPEMENTS,
        INVESTISSEMENT_URBANISME,
        INVESTISSEMENT_VOIRIE,
        INVESTISSEMENT_CULTURE,
    ]);
    assert_eq!(dataset.header(), expected);
}

#[test]
fn test_saint_denis_columns() {
    let dataset = generate_seeded(&saint_denis(), &GenerationConfig::default(), 42).unwrap();

    let mut expected = vec![ANNEE];
    expected.extend(SHARED);
    expected.extend([
        INVESTISSEMENT_ADMINISTRATIF,
        INVESTISSEMENT_UNIVERSITE,
        INVESTISSEMENT_CULTURE,
        INVESTISSEMENT_TRANSPORT,
        INVESTISSEMENT_URBANISME,
    ]);
    assert_eq!(dataset.header(), expected);
    assert_eq!(dataset.columns_in(MetricCategory::Investment).count(), 5);
}

#[test]
fn test_one_row_per_year_in_ascending_order() {
    for profile in [la_possession(), saint_denis()] {
        let dataset = generate_seeded(&profile, &GenerationConfig::default(), 3).unwrap();
        assert_eq!(dataset.len(), 24);
        let years: Vec<i16> = dataset.rows().map(|r| r.year.value()).collect();
        assert_eq!(years, (2002..=2025).collect::<Vec<_>>());
        for column in dataset.columns() {
            assert_eq!(column.values.len(), 24, "{}", column.name);
        }
    }
}

#[test]
fn test_population_strictly_increases_before_overlay() {
    let axis = YearAxis::new(2002, 2025).unwrap();
    for profile in [la_possession(), saint_denis()] {
        let base = DatasetAssembler::new(&profile, axis)
            .simulate(&mut Silent)
            .unwrap();
        let population = base.iter().find(|s| s.name == POPULATION).unwrap();
        assert!(
            strictly_increasing(&population.values),
            "{}: {:?}",
            profile.name,
            population.values
        );
    }
}

#[test]
fn test_saint_denis_population_strictly_increases() {
    // no overlay rule touches Saint-Denis' population
    let dataset = generate_seeded(&saint_denis(), &GenerationConfig::default(), 8).unwrap();
    assert!(strictly_increasing(dataset.column(POPULATION).unwrap()));
}

#[test]
fn test_totals_are_not_reconciled() {
    let dataset = generate_seeded(&la_possession(), &GenerationConfig::default(), 42).unwrap();
    let gap = dataset
        .component_gap(RECETTES_TOTALES, &REVENUE_COMPONENTS)
        .unwrap();
    assert_eq!(gap.len(), dataset.len());
    assert!(gap.iter().any(|g| g.abs() > 1e-6));

    assert!(dataset.component_gap(RECETTES_TOTALES, &["Missing"]).is_none());
}

#[test]
fn test_investment_shocks_are_visible() {
    let config = GenerationConfig::default().without_noise();
    let dataset = crate::simulation::generate_deterministic(&la_possession(), &config).unwrap();
    let invest = |y: i16| dataset.value(y.into(), INVESTISSEMENT).unwrap();
    // 2005 is a 1.5x shock year, 2006 is not
    assert!(invest(2005) > invest(2006) * 1.3);
}
