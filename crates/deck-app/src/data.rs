//! Figures shown on the slides
//!
//! All numbers come from the CIC-IIoT-2025 experiments and are fixed at
//! compile time.

use deck_views::colors::{
    ALERT_RED, BLUE_500, CYAN_500, CYBER_BLUE, EMERALD_500, FUCHSIA_500, LIME_500, ORANGE_500,
    PURPLE_300, RED_500, VIOLET_500, VIOLET_600, YELLOW_500,
};
use deck_views::{Dataset, Series};

pub const TOTAL_SAMPLES: u64 = 227_191;
pub const FEATURE_COUNT: u64 = 94;
pub const ATTACK_TYPES: u64 = 7;

pub static CLASS_SPLIT: Dataset = Dataset {
    name: "class_split",
    categories: &["Attack", "Benign"],
    series: &[Series::new("share", "Share (%)", CYBER_BLUE, &[39.8, 60.2])
        .with_point_colors(&[ALERT_RED, CYBER_BLUE])],
};

pub static ATTACK_CATEGORIES: Dataset = Dataset {
    name: "attack_categories",
    categories: &["Recon", "DoS", "DDoS", "MitM", "Malware", "Web", "Brute"],
    series: &[Series::new(
        "count",
        "Samples",
        RED_500,
        &[33_500.0, 18_500.0, 18_000.0, 8_000.0, 7_500.0, 2_500.0, 1_500.0],
    )
    .with_point_colors(&[
        RED_500,
        ORANGE_500,
        YELLOW_500,
        LIME_500,
        CYAN_500,
        VIOLET_500,
        FUCHSIA_500,
    ])],
};

pub static FEATURE_CORRELATION: Dataset = Dataset {
    name: "feature_correlation",
    categories: &["MSS Max", "MSS Avg", "Hdr Len Min", "Proto Count", "Pkt Count"],
    series: &[Series::new(
        "corr",
        "Correlation",
        BLUE_500,
        &[0.526, 0.525, 0.464, 0.423, 0.367],
    )
    .with_point_colors(&[CYAN_500, BLUE_500, BLUE_500, BLUE_500, BLUE_500])],
};

/// One row of the anomaly detector comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorScore {
    pub name: &'static str,
    pub f1: f64,
    pub auprc: f64,
    pub mcc: f64,
}

pub const ANOMALY_SCORES: [DetectorScore; 3] = [
    DetectorScore { name: "Isolation Forest", f1: 0.812, auprc: 0.860, mcc: 0.694 },
    DetectorScore { name: "One-Class SVM", f1: 0.789, auprc: 0.826, mcc: 0.663 },
    DetectorScore { name: "LOF (Best)", f1: 0.831, auprc: 0.873, mcc: 0.721 },
];

pub static ANOMALY_RESULTS: Dataset = Dataset {
    name: "anomaly_results",
    categories: &["Isolation Forest", "One-Class SVM", "LOF (Best)"],
    series: &[
        Series::new("f1", "F1 Score", BLUE_500, &[0.812, 0.789, 0.831]),
        Series::new("auprc", "AUPRC", CYAN_500, &[0.860, 0.826, 0.873]),
    ],
};

pub static PR_CURVES: Dataset = Dataset {
    name: "pr_curves",
    categories: &["0", "0.1", "0.3", "0.5", "0.7", "0.8", "0.9", "1.0"],
    series: &[
        Series::new("lof", "LOF (0.873)", RED_500, &[1.0, 0.98, 0.97, 0.96, 0.94, 0.90, 0.70, 0.40])
            .with_width(4.0)
            .with_markers(),
        Series::new(
            "if",
            "IsoForest (0.860)",
            BLUE_500,
            &[1.0, 0.96, 0.96, 0.95, 0.90, 0.86, 0.55, 0.40],
        ),
        Series::new(
            "svm",
            "OC-SVM (0.826)",
            EMERALD_500,
            &[1.0, 0.99, 0.94, 0.92, 0.91, 0.75, 0.46, 0.40],
        ),
    ],
};

/// One row of the supervised classifier comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierScore {
    pub name: &'static str,
    pub f1: f64,
    pub mcc: f64,
    pub auc: f64,
}

pub const CLASSIFIER_SCORES: [ClassifierScore; 3] = [
    ClassifierScore { name: "Random Forest", f1: 0.927, mcc: 0.890, auc: 0.961 },
    ClassifierScore { name: "Grad Boosting", f1: 0.925, mcc: 0.886, auc: 0.961 },
    ClassifierScore { name: "SVM (RBF)", f1: 0.874, mcc: 0.811, auc: 0.935 },
];

pub static CLASSIFICATION_F1: Dataset = Dataset {
    name: "classification_f1",
    categories: &["Random Forest", "Grad Boosting", "SVM (RBF)"],
    series: &[Series::new("f1", "F1", VIOLET_600, &[0.927, 0.925, 0.874])
        .with_point_colors(&[PURPLE_300, VIOLET_600, VIOLET_600])],
};

pub static FGSM_ACCURACY: Dataset = Dataset {
    name: "fgsm_accuracy",
    categories: &["0", "0.01", "0.05", "0.10", "0.50"],
    series: &[
        Series::new("acc", "Accuracy %", RED_500, &[90.2, 32.1, 17.7, 13.3, 3.1]).with_width(3.0),
    ],
};

pub static POISONING_ACCURACY: Dataset = Dataset {
    name: "poisoning_accuracy",
    categories: &["0%", "10%", "20%", "25%"],
    series: &[Series::new("acc", "Accuracy (%)", YELLOW_500, &[68.8, 67.0, 63.0, 60.5])
        .with_width(4.0)
        .with_markers()],
};

pub static ROBUSTNESS: Dataset = Dataset {
    name: "robustness",
    categories: &["Linear SVM", "Grad Boost", "Random Forest"],
    series: &[
        Series::new("astute", "Astute Accuracy (Clean)", BLUE_500, &[90.2, 94.4, 94.6]),
        Series::new("robust", "Robust Accuracy (Attacked)", RED_500, &[3.1, 34.2, 41.8]),
    ],
};

/// Detector with the best area under the precision-recall curve
pub fn best_detector() -> DetectorScore {
    ANOMALY_SCORES
        .iter()
        .copied()
        .fold(ANOMALY_SCORES[0], |best, row| if row.auprc > best.auprc { row } else { best })
}

/// Classifier with the best F1
pub fn best_classifier() -> ClassifierScore {
    CLASSIFIER_SCORES
        .iter()
        .copied()
        .fold(CLASSIFIER_SCORES[0], |best, row| if row.f1 > best.f1 { row } else { best })
}

/// Percentage of its clean accuracy a model keeps under attack
pub fn retained_accuracy(model: &str) -> Option<f64> {
    let index = ROBUSTNESS.categories.iter().position(|name| *name == model)?;
    let astute = ROBUSTNESS.series("astute")?.values.get(index)?;
    let robust = ROBUSTNESS.series("robust")?.values.get(index)?;
    Some(robust / astute * 100.0)
}

/// Every chart dataset, for authoring checks
pub static ALL_DATASETS: [&Dataset; 9] = [
    &CLASS_SPLIT,
    &ATTACK_CATEGORIES,
    &FEATURE_CORRELATION,
    &ANOMALY_RESULTS,
    &PR_CURVES,
    &CLASSIFICATION_F1,
    &FGSM_ACCURACY,
    &POISONING_ACCURACY,
    &ROBUSTNESS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dataset_is_well_formed() {
        for dataset in ALL_DATASETS {
            assert_eq!(dataset.validate(), Ok(()), "{}", dataset.name);
        }
    }

    #[test]
    fn test_class_split_adds_up() {
        assert!((CLASS_SPLIT.total("share") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_tables_match_charts() {
        for (i, row) in ANOMALY_SCORES.iter().enumerate() {
            let record = ANOMALY_RESULTS.record(i).unwrap();
            assert_eq!(record.category, row.name);
            assert_eq!(record.values, vec![("f1", row.f1), ("auprc", row.auprc)]);
        }
        for (i, row) in CLASSIFIER_SCORES.iter().enumerate() {
            assert_eq!(CLASSIFICATION_F1.categories[i], row.name);
            assert_eq!(CLASSIFICATION_F1.series[0].values[i], row.f1);
        }
    }

    #[test]
    fn test_best_models() {
        assert!(best_detector().name.starts_with("LOF"));
        assert_eq!(best_detector().auprc, 0.873);
        assert_eq!(best_classifier().name, "Random Forest");
    }

    #[test]
    fn test_retained_accuracy() {
        let forest = retained_accuracy("Random Forest").unwrap();
        assert_eq!(format!("{forest:.1}"), "44.2");
        assert!(retained_accuracy("Linear SVM").unwrap() < 5.0);
        assert_eq!(retained_accuracy("Perceptron"), None);
    }

    #[test]
    fn test_robust_accuracy_never_exceeds_astute() {
        let astute = ROBUSTNESS.series("astute").unwrap();
        let robust = ROBUSTNESS.series("robust").unwrap();
        for (a, r) in astute.values.iter().zip(robust.values) {
            assert!(r <= a);
        }
    }
}
