// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体和值对象，包括：
/// - 目录记录（catalog_record）：摄取流水线中传递的基本单元
/// - 地区代码（region）：两字母大写的国家代码
/// - 外部评分（external_rating）：0.0 到 10.0 之间的评分
/// - 外部标识符（external_id）：第三方目录的稳定标识，用作去重键
/// - 记录标识符（record_id）：记录的不透明UUID
///
/// 所有值对象在构造时完成校验，下游组件可直接视其为合法值。
pub mod catalog_record;
pub mod external_id;
pub mod external_rating;
pub mod record_id;
pub mod region;

pub use catalog_record::CatalogRecord;
pub use external_id::ExternalId;
pub use external_rating::ExternalRating;
pub use record_id::RecordId;
pub use region::Region;
