// ---------------------------------------------------------------------------
// Sample – one row of the test output
// ---------------------------------------------------------------------------

/// A single parsed output row.  The parser guarantees at least two values;
/// anything past the first two is carried along but ignored by the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub values: Vec<f64>,
}

impl Sample {
    pub fn x(&self) -> f64 {
        self.values[0]
    }

    pub fn y(&self) -> f64 {
        self.values[1]
    }
}

// ---------------------------------------------------------------------------
// TimelineDataset – the complete parsed run
// ---------------------------------------------------------------------------

/// All samples from one run, in output order.  The position of a sample in
/// this sequence is its color index, so order is significant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineDataset {
    pub samples: Vec<Sample>,
}

impl TimelineDataset {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the run produced no samples at all.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(Sample::x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(Sample::y)
    }
}
