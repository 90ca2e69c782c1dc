//! Stable column names shared by the built-in profiles and reporters.
//!
//! Generation never consults this list: the column set of a dataset is
//! whatever its profile declares.

pub const ANNEE: &str = "Annee";

pub const POPULATION: &str = "Population";
pub const MENAGES: &str = "Menages";

pub const RECETTES_TOTALES: &str = "Recettes_Totales";
pub const IMPOTS_LOCAUX: &str = "Impots_Locaux";
pub const DOTATIONS_ETAT: &str = "Dotations_Etat";
pub const AUTRES_RECETTES: &str = "Autres_Recettes";

pub const DEPENSES_TOTALES: &str = "Depenses_Totales";
pub const FONCTIONNEMENT: &str = "Fonctionnement";
pub const INVESTISSEMENT: &str = "Investissement";
pub const CHARGE_DETTE: &str = "Charge_Dette";
pub const PERSONNEL: &str = "Personnel";

pub const EPARGNE_BRUTE: &str = "Epargne_Brute";
pub const DETTE_TOTALE: &str = "Dette_Totale";
pub const TAUX_ENDETTEMENT: &str = "Taux_Endettement";
pub const TAUX_FISCALITE: &str = "Taux_Fiscalite";

pub const INVESTISSEMENT_EQUIPEMENTS: &str = "Investissement_Equipements";
pub const INVESTISSEMENT_URBANISME: &str = "Investissement_Urbanisme";
pub const INVESTISSEMENT_VOIRIE: &str = "Investissement_Voirie";
pub const INVESTISSEMENT_CULTURE: &str = "Investissement_Culture";
pub const INVESTISSEMENT_ADMINISTRATIF: &str = "Investissement_Administratif";
pub const INVESTISSEMENT_UNIVERSITE: &str = "Investissement_Universite";
pub const INVESTISSEMENT_TRANSPORT: &str = "Investissement_Transport";

/// Revenue components, in stacking order
pub const REVENUE_COMPONENTS: [&str; 3] = [IMPOTS_LOCAUX, DOTATIONS_ETAT, AUTRES_RECETTES];

/// Expense components, in stacking order
pub const EXPENSE_COMPONENTS: [&str; 4] = [FONCTIONNEMENT, INVESTISSEMENT, CHARGE_DETTE, PERSONNEL];
