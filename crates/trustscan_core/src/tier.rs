/// Whether a high value for a metric is favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// High is good.
    Normal,
    /// High is bad.
    Inverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Good,
    Warning,
    Bad,
}

impl Polarity {
    /// Lower bounds are inclusive: 80 is good, 50 is a warning (normal);
    /// 50 is bad, 20 is a warning (inverse).
    pub fn classify(self, score: f64) -> Tier {
        match self {
            Polarity::Normal => {
                if score >= 80.0 {
                    Tier::Good
                } else if score >= 50.0 {
                    Tier::Warning
                } else {
                    Tier::Bad
                }
            }
            Polarity::Inverse => {
                if score >= 50.0 {
                    Tier::Bad
                } else if score >= 20.0 {
                    Tier::Warning
                } else {
                    Tier::Good
                }
            }
        }
    }
}

/// The four named sub-metrics of a trust score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Legitimacy,
    Brand,
    Scam,
    Reviews,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Legitimacy,
        Metric::Brand,
        Metric::Scam,
        Metric::Reviews,
    ];

    pub fn polarity(self) -> Polarity {
        match self {
            Metric::Scam => Polarity::Inverse,
            Metric::Legitimacy | Metric::Brand | Metric::Reviews => Polarity::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Legitimacy => "Legitimacy",
            Metric::Brand => "Brand",
            Metric::Scam => "Scam pattern",
            Metric::Reviews => "Reviews",
        }
    }

    pub fn classify(self, score: f64) -> Tier {
        self.polarity().classify(score)
    }
}
