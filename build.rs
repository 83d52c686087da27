use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/reference_genomes.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         The genome catalog is embedded into the binary and must exist at build time.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let genomes = catalog.get("genomes").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'genomes' field\n\
             The catalog must have a top-level 'genomes' array.\n"
        );
    });

    let genomes = genomes.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'genomes' must be an array\n\
             Got: {genomes}\n"
        );
    });

    let mut ids = HashSet::new();
    let mut total_contigs = 0;
    for (i, genome) in genomes.iter().enumerate() {
        let genome_id = genome
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        for field in ["id", "display_name", "contigs"] {
            assert!(
                genome.get(field).is_some(),
                "\n\nCATALOG BUILD ERROR: Genome '{genome_id}' (index {i}) missing '{field}' field\n"
            );
        }

        assert!(
            ids.insert(genome_id),
            "\n\nCATALOG BUILD ERROR: Duplicate genome id '{genome_id}' (index {i})\n\
             Detection reports genomes by id, so ids must be unique.\n"
        );

        if let Some(contigs) = genome.get("contigs").and_then(|c| c.as_array()) {
            validate_contigs(contigs, genome_id);
            total_contigs += contigs.len();
        }
    }

    println!(
        "cargo:warning=Validated genome catalog: {} genomes, {total_contigs} total contigs",
        genomes.len()
    );
}

/// Every name and alias must point at exactly one contig of the genome
fn validate_contigs(contigs: &[serde_json::Value], genome_id: &str) {
    let mut names = HashSet::new();

    for (index, contig) in contigs.iter().enumerate() {
        let contig_name = contig
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Genome '{genome_id}' contig {index} missing 'name' string\n"
                )
            });

        let length = contig.get("length").and_then(serde_json::Value::as_u64);
        assert!(
            length.is_some_and(|len| len > 0),
            "\n\nCATALOG BUILD ERROR: Genome '{genome_id}' contig '{contig_name}' needs a positive integer 'length'\n"
        );

        let aliases = match contig.get("aliases") {
            None => Vec::new(),
            Some(aliases) => aliases
                .as_array()
                .and_then(|a| a.iter().map(|v| v.as_str()).collect::<Option<Vec<_>>>())
                .unwrap_or_else(|| {
                    panic!(
                        "\n\nCATALOG BUILD ERROR: Genome '{genome_id}' contig '{contig_name}' 'aliases' must be an array of strings\n"
                    )
                }),
        };

        for name in std::iter::once(contig_name).chain(aliases) {
            assert!(
                names.insert(name),
                "\n\nCATALOG BUILD ERROR: Genome '{genome_id}' uses contig name '{name}' twice\n\
                 Names and aliases must be unique within a genome.\n"
            );
        }
    }
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed=catalogs/reference_genomes.json");
    println!("cargo:rerun-if-changed=build.rs");
}
