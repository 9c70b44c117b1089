// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Colorpath: ordered multi-color path routing on a 4-connected grid.
//!
//! Each demand connects two cells with a path of its color. Demands are routed one after another
//! with A*; committed cells become obstacles for every other color and stay pass-through for
//! their own.

pub mod model;
pub mod render;
pub mod route;
pub mod store;
