/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_volume_core::element_type::ElementType;
use zune_volume_core::log::trace;

use crate::errors::VolumeErrors;
use crate::volume::Volume;

/// This encapsulates a volume operation.
///
/// Operations validate their configuration and the volume's element type
/// in [`execute`](OperationsTrait::execute) before doing any work, so
/// implementations of `execute_impl` can assume both are valid.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation, manipulating the volume in place
    ///
    /// This is called by [`execute`](OperationsTrait::execute) after
    /// the element type has been checked against
    /// [`supported_types`](OperationsTrait::supported_types).
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, volume: &mut Volume) -> Result<(), VolumeErrors>;

    /// Element types this operation can process
    fn supported_types(&self) -> &'static [ElementType];

    /// Execute an operation on the volume
    ///
    /// # Errors
    /// - The volume's element type isn't supported by the operation
    /// - Any error from the operation itself
    fn execute(&self, volume: &mut Volume) -> Result<(), VolumeErrors> {
        let element_type = volume.element_type();

        if !self.supported_types().contains(&element_type) {
            return Err(VolumeErrors::OperationNotImplemented(
                self.name(),
                element_type
            ));
        }
        trace!("Running {} on {element_type} volume", self.name());

        self.execute_impl(volume)
    }

    /// Run the operation on a copy of the volume, leaving the
    /// original untouched
    ///
    /// # Errors
    /// See [`execute`](OperationsTrait::execute)
    fn clone_and_execute(&self, volume: &Volume) -> Result<Volume, VolumeErrors> {
        let mut new_volume = volume.clone();
        self.execute(&mut new_volume)?;
        Ok(new_volume)
    }
}
