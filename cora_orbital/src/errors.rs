/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoraOrbitalError>;
 
#[derive(Error,Debug)]
pub enum CoraOrbitalError {

   /// structural TLE defect (missing or mis-prefixed element lines, undecodable fields)
   #[error("malformed TLE: {0}")]
   MalformedTle( String ),

   /// numerical failure of SGP4 (e.g. decayed orbit, eccentricity out of range)
   #[error("SGP4 propagation error: {0}")]
   PropagationError( #[from] PropagationFailure ),

   #[error("non-finite state vector: {0}")]
   NonFiniteState( String ),
}

/// the different ways SGP4 can fail once the element set was decoded
#[derive(Error,Debug)]
pub enum PropagationFailure {
   #[error("invalid elements {0}")]
   Elements( #[from] sgp4::ElementsError ),

   #[error("{0}")]
   Algorithm( #[from] sgp4::Error ),

   #[error("epoch offset {0}")]
   EpochOffset( #[from] sgp4::DatetimeToMinutesSinceEpochError ),

   /// SGP4 itself does not check if the orbit is still above ground
   #[error("orbit decayed, |r| = {0:.3} km")]
   Decayed( f64 ),
}

impl From<sgp4::ElementsError> for CoraOrbitalError {
    fn from (e: sgp4::ElementsError)->Self { CoraOrbitalError::PropagationError( e.into()) }
}

impl From<sgp4::Error> for CoraOrbitalError {
    fn from (e: sgp4::Error)->Self { CoraOrbitalError::PropagationError( e.into()) }
}

impl From<sgp4::DatetimeToMinutesSinceEpochError> for CoraOrbitalError {
    fn from (e: sgp4::DatetimeToMinutesSinceEpochError)->Self { CoraOrbitalError::PropagationError( e.into()) }
}

macro_rules! malformed_tle {
    ($fmt:literal $(, $arg:expr )* ) => {
        CoraOrbitalError::MalformedTle( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use malformed_tle;
