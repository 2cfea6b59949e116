//! GCP resource vocabulary, detection patterns, and placeholder templates.

use super::{CategorySpec, PlatformProfile};
use crate::domain::Platform;

pub(super) static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Gcp,
    categories: CATEGORIES,
};

const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "VPC",
        config_pattern: Some(r"google_compute_network"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: VPC
resource "google_compute_network" "auto_generated" {
  name                    = "auto-vpc"
  auto_create_subnetworks = true
}"#,
        ),
    },
    CategorySpec {
        name: "subnet",
        config_pattern: Some(r"google_compute_subnetwork"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: subnet
resource "google_compute_subnetwork" "auto_generated" {
  name          = "auto-subnet"
  ip_cidr_range = "10.0.1.0/24"
  region        = "us-central1"
  network       = "auto-vpc"
}"#,
        ),
    },
    CategorySpec {
        name: "firewall",
        config_pattern: Some(r"google_compute_firewall"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: firewall
resource "google_compute_firewall" "auto_generated" {
  name    = "auto-fw"
  network = "auto-vpc"
  allow {
    protocol = "tcp"
    ports    = ["80", "443"]
  }
  source_ranges = ["0.0.0.0/0"]
}"#,
        ),
    },
    CategorySpec {
        name: "GKE",
        config_pattern: Some(r"google_container_cluster"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: GKE
resource "google_container_cluster" "auto_generated" {
  name     = "auto-gke"
  location = "us-central1"
  initial_node_count = 1
  node_config {
    machine_type = "e2-medium"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "VM Instance",
        config_pattern: Some(r"google_compute_instance"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: VM Instance
resource "google_compute_instance" "auto_generated" {
  name         = "auto-instance"
  machine_type = "e2-micro"
  zone         = "us-central1-a"
  boot_disk {
    initialize_params {
      image = "debian-cloud/debian-11"
    }
  }
  network_interface {
    network = "default"
    access_config {}
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Cloud SQL",
        config_pattern: Some(r"google_sql_database_instance"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Cloud SQL
resource "google_sql_database_instance" "auto_generated" {
  name             = "auto-sql"
  database_version = "POSTGRES_13"
  region           = "us-central1"
  settings {
    tier = "db-f1-micro"
  }
  root_password = "ChangeMe1234!"
}"#,
        ),
    },
    CategorySpec {
        name: "Pub/Sub",
        config_pattern: Some(r"google_pubsub_topic|google_pubsub_subscription"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Pub/Sub
resource "google_pubsub_topic" "auto_generated" {
  name = "auto-topic"
}
resource "google_pubsub_subscription" "auto_generated" {
  name  = "auto-subscription"
  topic = google_pubsub_topic.auto_generated.name
}"#,
        ),
    },
    CategorySpec {
        name: "Storage Bucket",
        config_pattern: Some(r"google_storage_bucket"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Storage Bucket
resource "google_storage_bucket" "auto_generated" {
  name     = "auto-bucket-${random_id.suffix.hex}"
  location = "US"
}"#,
        ),
    },
    CategorySpec {
        name: "BigQuery",
        config_pattern: Some(r"google_bigquery_dataset|google_bigquery_table"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: BigQuery
resource "google_bigquery_dataset" "auto_generated" {
  dataset_id                  = "auto_dataset"
  location                    = "US"
  delete_contents_on_destroy  = true
}
resource "google_bigquery_table" "auto_generated" {
  table_id   = "auto_table"
  dataset_id = google_bigquery_dataset.auto_generated.dataset_id
  schema     = <<EOF
[
  {
    "name": "id",
    "type": "STRING",
    "mode": "REQUIRED"
  }
]
EOF
}"#,
        ),
    },
    CategorySpec {
        name: "Cloud Function",
        config_pattern: Some(r"google_cloudfunctions_function"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Cloud Function
resource "google_storage_bucket" "auto_generated_func" {
  name     = "auto-func-bucket"
  location = "US"
}
resource "google_cloudfunctions_function" "auto_generated" {
  name        = "auto-function"
  runtime     = "python39"
  entry_point = "hello_world"
  region      = "us-central1"
  source_archive_bucket = google_storage_bucket.auto_generated_func.name
  source_archive_object = "function-source.zip"
  trigger_http         = true
}"#,
        ),
    },
    CategorySpec {
        name: "Load Balancer",
        config_pattern: Some(
            r"google_compute_forwarding_rule|google_compute_target_pool|google_compute_backend_service",
        ),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Load Balancer
resource "google_compute_forwarding_rule" "auto_generated" {
  name       = "auto-lb"
  load_balancing_scheme = "EXTERNAL"
  port_range = "80"
  target     = "auto-target-proxy" # Replace with the real target
}"#,
        ),
    },
    CategorySpec {
        name: "Cloud DNS",
        config_pattern: Some(r"google_dns_managed_zone"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Cloud DNS
resource "google_dns_managed_zone" "auto_generated" {
  name     = "auto-zone"
  dns_name = "auto.example.com."
}"#,
        ),
    },
    CategorySpec {
        name: "Cloud NAT",
        config_pattern: Some(r"google_compute_router_nat"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Cloud NAT
resource "google_compute_router_nat" "auto_generated" {
  name   = "auto-nat"
  router = "auto-router"
  region = "us-central1"
  nat_ip_allocate_option = "AUTO_ONLY"
  source_subnetwork_ip_ranges_to_nat = "ALL_SUBNETWORKS_ALL_IP_RANGES"
}"#,
        ),
    },
    CategorySpec {
        name: "Cloud Router",
        config_pattern: Some(r"google_compute_router"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Cloud Router
resource "google_compute_router" "auto_generated" {
  name    = "auto-router"
  network = "auto-vpc"
  region  = "us-central1"
}"#,
        ),
    },
    CategorySpec {
        name: "IAM",
        config_pattern: Some(r"google_project_iam_|google_service_account"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: IAM
resource "google_service_account" "auto_generated" {
  account_id   = "auto-sa"
  display_name = "Auto Service Account"
}
resource "google_project_iam_member" "auto_generated" {
  project = "auto-project-id"
  role    = "roles/viewer"
  member  = "serviceAccount:${google_service_account.auto_generated.email}"
}"#,
        ),
    },
    CategorySpec {
        name: "Secret Manager",
        config_pattern: Some(r"google_secret_manager_secret"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Secret Manager
resource "google_secret_manager_secret" "auto_generated" {
  secret_id = "auto-secret"
  replication {
    automatic = true
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Cloud Run",
        config_pattern: Some(r"google_cloud_run_service"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Cloud Run
resource "google_cloud_run_service" "auto_generated" {
  name     = "auto-run"
  location = "us-central1"
  template {
    spec {
      containers {
        image = "gcr.io/cloudrun/hello"
      }
    }
  }
  traffic {
    percent         = 100
    latest_revision = true
  }
}"#,
        ),
    },
    CategorySpec {
        name: "VPN",
        config_pattern: Some(r"google_compute_vpn_gateway"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: VPN
resource "google_compute_vpn_gateway" "auto_generated" {
  name    = "auto-vpn"
  network = "auto-vpc"
  region  = "us-central1"
}"#,
        ),
    },
    CategorySpec {
        name: "Memorystore",
        config_pattern: Some(r"google_redis_instance"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Memorystore
resource "google_redis_instance" "auto_generated" {
  name           = "auto-redis"
  tier           = "BASIC"
  memory_size_gb = 1
  region         = "us-central1"
}"#,
        ),
    },
];
