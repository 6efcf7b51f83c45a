//! Command line arguments of the loader binary.

use clap::Parser;

use super::loader_config::{DEFAULT_BULK_CHUNK_SIZE, DEFAULT_ID_FIELD};

/// Rebuild the vessel index from newline-delimited JSON on stdin and swap it
/// in behind an alias.
#[derive(Parser, Debug, Clone)]
#[command(name = "vessel-index-loader")]
#[command(about = "Load vessel documents into a fresh index and promote it behind an alias", long_about = None)]
pub struct LoaderArgs {
    /// Search store URL (e.g. http://localhost:9200)
    pub store_url: String,

    /// Alias readers query
    pub alias: String,

    /// Index settings and mappings, as inline JSON or a path to a JSON file
    pub schema: String,

    /// Document field used as the document identifier
    #[arg(long, env = "DOCUMENT_ID_FIELD", default_value = DEFAULT_ID_FIELD)]
    pub id_field: String,

    /// Number of documents per bulk request
    #[arg(long, env = "BULK_CHUNK_SIZE", default_value_t = DEFAULT_BULK_CHUNK_SIZE)]
    pub bulk_chunk_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = LoaderArgs::try_parse_from([
            "vessel-index-loader",
            "http://localhost:9200",
            "vessels",
            "schema.json",
            "--id-field",
            "id",
            "--bulk-chunk-size",
            "50",
        ])
        .unwrap();

        assert_eq!(args.store_url, "http://localhost:9200");
        assert_eq!(args.alias, "vessels");
        assert_eq!(args.schema, "schema.json");
        assert_eq!(args.id_field, "id");
        assert_eq!(args.bulk_chunk_size, 50);
    }

    #[test]
    fn test_missing_schema_argument() {
        let result =
            LoaderArgs::try_parse_from(["vessel-index-loader", "http://localhost:9200", "vessels"]);
        assert!(result.is_err());
    }
}
