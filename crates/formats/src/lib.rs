pub mod cluster_json;
pub mod master;
pub mod table;
pub mod world_geometry;

pub use cluster_json::{ClusterDataError, parse_cluster_json};
pub use master::{MasterDataError, load_dataset, parse_master_csv};
pub use table::{CsvTable, CsvTableError};
pub use world_geometry::{CountryFeature, WorldGeometry, WorldGeometryError};
