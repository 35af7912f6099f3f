// =============================================================================
// =============================================================================

/// Version string for Effora
pub const VERSION: &str = "0.1.0";

// =============================================================================
// =============================================================================

/// Prefix for the run-local surrogate identifiers handed to the statistics tool
pub const SURROGATE_PREFIX: &str = "protein";

/// Relation name written to the feature table header
pub const ARFF_RELATION: &str = "effectors";

/// Name of the trailing class attribute in the feature table
pub const CLASS_ATTRIBUTE: &str = "class";

/// Nominal values of the class attribute, as the trained model knows them
pub const CLASS_VALUES: [&str; 2] = ["effector", "non-effector"];

/// WEKA classifier class the trained model was built with
pub const WEKA_CLASSIFIER: &str = "weka.classifiers.bayes.NaiveBayes";

// =============================================================================
// =============================================================================

/// Ordered numeric attribute names of the feature schema.
///
/// The first four are taken from the per-record summary fields of the
/// statistics report; the remaining nine are the Mole% values of the
/// pepstats property classes, in report order.
pub const FEATURE_ATTRIBUTES: [&str; 13] = [
    "Length",
    "MolecularWeight",
    "Charge",
    "IsoelectricPoint",
    "Tiny",
    "Small",
    "Aliphatic",
    "Aromatic",
    "NonPolar",
    "Polar",
    "Charged",
    "Basic",
    "Acidic",
];

/// Property-class labels as they appear in the pepstats report, in report order
pub const PEPSTATS_PROPERTIES: [&str; 9] = [
    "Tiny",
    "Small",
    "Aliphatic",
    "Aromatic",
    "Non-polar",
    "Polar",
    "Charged",
    "Basic",
    "Acidic",
];
