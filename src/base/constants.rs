/// Defines the number of scalar field channels holding the velocity-gradient components
pub const N_TENSOR_CHANNELS: usize = 9;

/// Defines the number of columns of the history matrix (step + 9 components + time increment)
pub const HISTORY_NCOL: usize = N_TENSOR_CHANNELS + 2;

/// Defines the magnitude below which (inclusive) extracted tensor values are coerced to zero
pub const NOISE_THRESHOLD: f64 = 1e-5;

/// Defines the number of solution-dependent state variables allocated for the paired subroutine
///
/// The paired subroutine stores the 9 velocity-gradient components plus 13 internal slots.
pub const N_STATE_VARIABLES: usize = 22;

/// Defines the deformation control flag written to the history file header
pub const VPSC_CONTROL_FLAG: usize = 7;

/// Defines the test temperature (K) written to the history file header
pub const VPSC_TEMPERATURE: usize = 298;

/// Defines the default filename of the deformation history file
pub const DEFAULT_HISTORY_FILENAME: &str = "FE-Lij_hist.dat";

/// Defines the conventional channels where the paired subroutine stores the velocity gradient
///
/// The order is L11, L12, L13, L21, L22, L23, L31, L32, L33.
pub const DEFAULT_CHANNELS: [&str; N_TENSOR_CHANNELS] = [
    "SDV14", "SDV15", "SDV16", "SDV17", "SDV18", "SDV19", "SDV20", "SDV21", "SDV22",
];
