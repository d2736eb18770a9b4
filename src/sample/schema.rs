//! The fixed, ordered feature schema of the input records.
//! The position of a name in [`FEATURE_NAMES`] is its dimension index
//! everywhere in the crate.

/// Column holding the immutable event identifier.
pub const EVENT_ID: &str = "EventId";
/// Column holding the importance weight of a training record.
pub const WEIGHT: &str = "Weight";
/// Column holding the class label (`s` or `b`) of a training record.
pub const LABEL: &str = "Label";

/// Sentinel that marks a missing feature value in the input files.
pub const DEFAULT_MISSING_SENTINEL: f64 = -999.0;

/// Number of feature dimensions per record.
pub const N_FEATURES: usize = 30;

/// Feature names in dimension order.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "DER_mass_MMC",
    "DER_mass_transverse_met_lep",
    "DER_mass_vis",
    "DER_pt_h",
    "DER_deltaeta_jet_jet",
    "DER_mass_jet_jet",
    "DER_prodeta_jet_jet",
    "DER_deltar_tau_lep",
    "DER_pt_tot",
    "DER_sum_pt",
    "DER_pt_ratio_lep_tau",
    "DER_met_phi_centrality",
    "DER_lep_eta_centrality",
    "PRI_tau_pt",
    "PRI_tau_eta",
    "PRI_tau_phi",
    "PRI_lep_pt",
    "PRI_lep_eta",
    "PRI_lep_phi",
    "PRI_met",
    "PRI_met_phi",
    "PRI_met_sumet",
    "PRI_jet_num",
    "PRI_jet_leading_pt",
    "PRI_jet_leading_eta",
    "PRI_jet_leading_phi",
    "PRI_jet_subleading_pt",
    "PRI_jet_subleading_eta",
    "PRI_jet_subleading_phi",
    "PRI_jet_all_pt",
];


/// Returns every dimension of the schema, in order.
#[inline]
pub fn dimension_pool() -> Vec<usize> {
    (0..N_FEATURES).collect()
}


/// Returns the dimension index of the feature named `name`.
#[inline]
pub fn dimension_of(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|feature| *feature == name)
}


/// Maps the configured sentinel to `NaN`.
#[inline(always)]
pub(crate) fn normalize_missing(value: f64, sentinel: f64) -> f64 {
    if value == sentinel { f64::NAN } else { value }
}
