//! Built-in municipal profiles.
//!
//! Amounts are in millions of euros, population and households in units,
//! ratios as plain fractions. Every shock year and overlay window below is a
//! narrative event of the municipality, not a measured figure.

use super::builder::ProfileBuilder;
use super::metric_builder::MetricBuilder;
use crate::model::columns::*;
use crate::model::{MunicipalProfile, YearWindow};

/// Every built-in profile, in a stable order
#[must_use]
pub fn builtin_profiles() -> Vec<MunicipalProfile> {
    vec![la_possession(), saint_denis()]
}

/// Look up a built-in profile by slug or display name (case-insensitive)
#[must_use]
pub fn find_builtin(key: &str) -> Option<MunicipalProfile> {
    let key = key.trim().to_lowercase().replace(['-', ' '], "_");
    builtin_profiles().into_iter().find(|p| {
        p.slug == key || p.name.to_lowercase().replace(['-', ' '], "_") == key
    })
}

/// La Possession: fast-growing suburban commune
#[must_use]
pub fn la_possession() -> MunicipalProfile {
    ProfileBuilder::new("La Possession")
        .slug("possession")
        // Demography
        .metric(MetricBuilder::demography(POPULATION, 25_000.0).linear(0.012))
        .metric(MetricBuilder::demography(MENAGES, 9_000.0).linear(0.013))
        // Revenue
        .metric(MetricBuilder::revenue(RECETTES_TOTALES, 25.0).linear(0.03).noise(0.05))
        .metric(MetricBuilder::revenue(IMPOTS_LOCAUX, 10.0).linear(0.035).noise(0.06))
        .metric(
            MetricBuilder::revenue(DOTATIONS_ETAT, 9.0)
                .from_year(2008, -0.008)
                .noise(0.04),
        )
        .metric(MetricBuilder::revenue(AUTRES_RECETTES, 6.0).linear(0.02).noise(0.07))
        // Expenses
        .metric(MetricBuilder::expense(DEPENSES_TOTALES, 24.0).linear(0.031).noise(0.05))
        .metric(MetricBuilder::expense(FONCTIONNEMENT, 16.0).linear(0.025).noise(0.04))
        .metric(
            MetricBuilder::expense(INVESTISSEMENT, 8.0)
                .linear(0.02)
                .noise(0.15)
                .shocks(&[2005, 2012, 2018, 2022], 1.5)
                .shocks(&[2008, 2014, 2020], 0.7),
        )
        .metric(
            MetricBuilder::expense(CHARGE_DETTE, 2.0)
                .from_year(2005, 0.01)
                .noise(0.08),
        )
        .metric(MetricBuilder::expense(PERSONNEL, 9.0).linear(0.026).noise(0.03))
        // Indicators
        .metric(
            MetricBuilder::indicator(EPARGNE_BRUTE, 2.0)
                .from_year(2010, 0.02)
                .noise(0.1),
        )
        .metric(
            MetricBuilder::indicator(DETTE_TOTALE, 20.0)
                .noise(0.07)
                .shocks(&[2005, 2012, 2018, 2022], 1.15)
                .shocks(&[2010, 2015, 2020], 0.9),
        )
        .metric(
            MetricBuilder::indicator(TAUX_ENDETTEMENT, 0.8)
                .from_year(2010, -0.02)
                .noise(0.05),
        )
        .metric(
            MetricBuilder::indicator(TAUX_FISCALITE, 1.1)
                .from_year(2010, 0.005)
                .noise(0.02),
        )
        // Investment breakdown
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_EQUIPEMENTS, 2.0)
                .linear(0.015)
                .noise(0.12)
                .shocks(&[2005, 2013, 2019, 2024], 1.8),
        )
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_URBANISME, 1.5)
                .linear(0.02)
                .noise(0.15)
                .shocks(&[2006, 2015, 2021, 2025], 2.0),
        )
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_VOIRIE, 1.3)
                .linear(0.018)
                .noise(0.13)
                .shocks(&[2004, 2007, 2014, 2017, 2022, 2025], 1.7),
        )
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_CULTURE, 0.5)
                .linear(0.025)
                .noise(0.2)
                .shocks(&[2008, 2016, 2020, 2024], 2.5),
        )
        // Initial development
        .scale("Développement initial", INVESTISSEMENT_URBANISME, YearWindow::between(2002, 2005), 1.3)
        .scale("Développement initial", INVESTISSEMENT_VOIRIE, YearWindow::between(2002, 2005), 1.4)
        // Financial crisis
        .scale("Crise financière", RECETTES_TOTALES, YearWindow::between(2008, 2009), 0.95)
        .scale("Crise financière", INVESTISSEMENT, YearWindow::between(2008, 2009), 0.85)
        .scale("Crise financière", AUTRES_RECETTES, YearWindow::between(2008, 2009), 0.9)
        // Accelerated urban development
        .scale("Développement urbain", INVESTISSEMENT_URBANISME, YearWindow::between(2010, 2015), 1.2)
        .scale("Développement urbain", INVESTISSEMENT_VOIRIE, YearWindow::between(2010, 2015), 1.15)
        .scale("Développement urbain", POPULATION, YearWindow::between(2010, 2015), 1.02)
        // COVID-19: lower tax receipts, higher social spending
        .scale("Crise COVID-19", IMPOTS_LOCAUX, YearWindow::between(2020, 2020), 0.95)
        .scale("Crise COVID-19", AUTRES_RECETTES, YearWindow::between(2020, 2020), 0.9)
        .scale("Crise COVID-19", FONCTIONNEMENT, YearWindow::between(2020, 2020), 1.05)
        // Ageing population and cultural policy
        .ramp("Vieillissement de la population", FONCTIONNEMENT, 2010, 0.01)
        .ramp("Politique culturelle", INVESTISSEMENT_CULTURE, 2012, 0.03)
        // Recovery plan
        .scale("Plan de relance", INVESTISSEMENT, YearWindow::starting(2022), 1.1)
        .scale("Plan de relance", INVESTISSEMENT_EQUIPEMENTS, YearWindow::starting(2022), 1.05)
        .milestone("2002-2005 : développement initial de la commune")
        .milestone("2008-2009 : impact de la crise financière mondiale")
        .milestone("2010-2015 : accélération du développement urbain")
        .milestone("2020-2021 : gestion de la crise COVID-19")
        .milestone("2022-2025 : plan de relance post-COVID")
        .recommendation("Maintenir une politique d'investissement équilibrée")
        .recommendation("Diversifier les sources de recettes face à la baisse des dotations de l'État")
        .recommendation("Optimiser la gestion de la dette")
        .recommendation("Adapter les services aux besoins d'une population croissante")
        .recommendation("Développer des partenariats public-privé pour les grands projets")
        .recommendation("Renforcer la transparence budgétaire auprès des citoyens")
        .build()
}

/// Saint-Denis: prefecture, largest budget, administrative and university hub
#[must_use]
pub fn saint_denis() -> MunicipalProfile {
    ProfileBuilder::new("Saint-Denis")
        // Demography
        .metric(MetricBuilder::demography(POPULATION, 135_000.0).linear(0.01))
        .metric(MetricBuilder::demography(MENAGES, 45_000.0).linear(0.009))
        // Revenue
        .metric(MetricBuilder::revenue(RECETTES_TOTALES, 120.0).linear(0.033).noise(0.05))
        .metric(MetricBuilder::revenue(IMPOTS_LOCAUX, 55.0).linear(0.035).noise(0.06))
        .metric(
            MetricBuilder::revenue(DOTATIONS_ETAT, 45.0)
                .from_year(2008, -0.003)
                .noise(0.04),
        )
        .metric(MetricBuilder::revenue(AUTRES_RECETTES, 20.0).linear(0.032).noise(0.07))
        // Expenses
        .metric(MetricBuilder::expense(DEPENSES_TOTALES, 115.0).linear(0.032).noise(0.05))
        .metric(MetricBuilder::expense(FONCTIONNEMENT, 70.0).linear(0.03).noise(0.04))
        .metric(
            MetricBuilder::expense(INVESTISSEMENT, 45.0)
                .linear(0.031)
                .noise(0.15)
                .shocks(&[2005, 2010, 2015, 2020], 1.6)
                .shocks(&[2008, 2013, 2019], 0.85),
        )
        .metric(
            MetricBuilder::expense(CHARGE_DETTE, 8.0)
                .from_year(2005, 0.01)
                .noise(0.08),
        )
        .metric(MetricBuilder::expense(PERSONNEL, 50.0).linear(0.029).noise(0.03))
        // Indicators
        .metric(
            MetricBuilder::indicator(EPARGNE_BRUTE, 6.0)
                .from_year(2010, 0.014)
                .noise(0.1),
        )
        .metric(
            MetricBuilder::indicator(DETTE_TOTALE, 90.0)
                .noise(0.07)
                .shocks(&[2005, 2010, 2015, 2020], 1.16)
                .shocks(&[2008, 2013, 2018, 2023], 0.92),
        )
        .metric(
            MetricBuilder::indicator(TAUX_ENDETTEMENT, 0.75)
                .from_year(2010, -0.015)
                .noise(0.05),
        )
        .metric(
            MetricBuilder::indicator(TAUX_FISCALITE, 1.18)
                .from_year(2010, 0.005)
                .noise(0.02),
        )
        // Investment breakdown
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_ADMINISTRATIF, 8.0)
                .linear(0.028)
                .noise(0.12)
                .shocks(&[2006, 2011, 2016, 2021], 1.7),
        )
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_UNIVERSITE, 7.0)
                .linear(0.032)
                .noise(0.14)
                .shocks(&[2007, 2012, 2017, 2022], 1.8),
        )
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_CULTURE, 5.0)
                .linear(0.03)
                .noise(0.15)
                .shocks(&[2008, 2013, 2018, 2023], 1.9),
        )
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_TRANSPORT, 6.0)
                .linear(0.031)
                .noise(0.17)
                .shocks(&[2005, 2010, 2015, 2020], 1.8),
        )
        .metric(
            MetricBuilder::investment(INVESTISSEMENT_URBANISME, 7.0)
                .linear(0.029)
                .noise(0.16)
                .shocks(&[2009, 2014, 2019, 2024], 1.7),
        )
        // Initial development of the prefecture
        .scale("Développement initial", INVESTISSEMENT_ADMINISTRATIF, YearWindow::between(2002, 2005), 1.4)
        .scale("Développement initial", INVESTISSEMENT_TRANSPORT, YearWindow::between(2002, 2005), 1.3)
        // Financial crisis
        .scale("Crise financière", RECETTES_TOTALES, YearWindow::between(2008, 2009), 0.95)
        .scale("Crise financière", INVESTISSEMENT, YearWindow::between(2008, 2009), 0.83)
        .scale("Crise financière", AUTRES_RECETTES, YearWindow::between(2008, 2009), 0.9)
        // University and cultural development
        .scale("Développement accéléré", INVESTISSEMENT_UNIVERSITE, YearWindow::between(2010, 2015), 1.3)
        .scale("Développement accéléré", INVESTISSEMENT_CULTURE, YearWindow::between(2010, 2015), 1.25)
        // COVID-19: lower receipts
        .scale("Crise COVID-19", AUTRES_RECETTES, YearWindow::between(2020, 2020), 0.87)
        .scale("Crise COVID-19", IMPOTS_LOCAUX, YearWindow::between(2020, 2020), 0.94)
        // Ageing population, university and cultural policies
        .ramp("Vieillissement de la population", FONCTIONNEMENT, 2010, 0.011)
        .ramp("Politique universitaire", INVESTISSEMENT_UNIVERSITE, 2012, 0.028)
        .ramp("Développement culturel", INVESTISSEMENT_CULTURE, 2010, 0.026)
        // Recovery plan focused on transport and urbanism
        .scale("Plan de relance", INVESTISSEMENT, YearWindow::starting(2022), 1.14)
        .scale("Plan de relance", INVESTISSEMENT_TRANSPORT, YearWindow::starting(2022), 1.16)
        .scale("Plan de relance", INVESTISSEMENT_URBANISME, YearWindow::starting(2022), 1.15)
        .milestone("2002-2005 : développement initial de la préfecture")
        .milestone("2006-2007 : investissements dans les infrastructures administratives")
        .milestone("2008-2009 : impact de la crise financière mondiale")
        .milestone("2010-2015 : développement de l'université et des infrastructures culturelles")
        .milestone("2020-2021 : impact de la crise COVID-19 sur l'économie locale")
        .milestone("2022-2025 : plan de relance axé sur les transports et l'urbanisme")
        .recommendation("Capitaliser sur le statut de préfecture et de capitale administrative")
        .recommendation("Développer le pôle universitaire et de recherche")
        .recommendation("Améliorer les transports et la mobilité urbaine")
        .recommendation("Renforcer l'attractivité culturelle (musées, festivals, patrimoine)")
        .recommendation("Moderniser les infrastructures administratives")
        .recommendation("Gérer la densification urbaine et développer les espaces verts")
        .recommendation("Maintenir un équilibre entre développement économique et qualité de vie")
        .build()
}
