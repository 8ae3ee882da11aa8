/* src/cli/core/src/config/tests/mod.rs */

use super::*;
use super::types::PORT_ENV;
