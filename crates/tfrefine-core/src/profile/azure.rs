//! Azure resource vocabulary, detection patterns, and placeholder templates.

use super::{CategorySpec, PlatformProfile};
use crate::domain::Platform;

pub(super) static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Azure,
    categories: CATEGORIES,
};

const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "VNet",
        config_pattern: Some(r"azurerm_virtual_network"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: VNet
resource "azurerm_virtual_network" "auto_generated" {
  name                = "auto-vnet"
  address_space       = ["10.0.0.0/16"]
  location            = "East US"
  resource_group_name = "auto-generated"
  tags = {
    Environment = "auto"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "subnet",
        config_pattern: Some(r"azurerm_subnet"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: subnet
resource "azurerm_subnet" "auto_generated" {
  name                 = "auto-subnet"
  resource_group_name  = "auto-generated"
  virtual_network_name = "auto-vnet"
  address_prefixes     = ["10.0.1.0/24"]
}"#,
        ),
    },
    CategorySpec {
        name: "NSG",
        config_pattern: Some(r"azurerm_network_security_group"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: NSG
resource "azurerm_network_security_group" "auto_generated" {
  name                = "auto-nsg"
  location            = "East US"
  resource_group_name = "auto-generated"
  security_rule {
    name                       = "allow_http"
    priority                   = 100
    direction                  = "Inbound"
    access                     = "Allow"
    protocol                   = "Tcp"
    source_port_range          = "*"
    destination_port_range     = "80"
    source_address_prefix      = "*"
    destination_address_prefix = "*"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "AKS",
        config_pattern: Some(r"azurerm_kubernetes_cluster"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: AKS
resource "azurerm_kubernetes_cluster" "auto_generated" {
  name                = "auto-aks"
  location            = "East US"
  resource_group_name = "auto-generated"
  dns_prefix          = "auto-aks"
  default_node_pool {
    name       = "default"
    node_count = 1
    vm_size    = "Standard_DS2_v2"
  }
  identity {
    type = "SystemAssigned"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "VM",
        config_pattern: Some(r"azurerm_linux_virtual_machine|azurerm_windows_virtual_machine"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: VM
resource "azurerm_linux_virtual_machine" "auto_generated" {
  name                  = "auto-vm"
  resource_group_name   = "auto-generated"
  location              = "East US"
  size                  = "Standard_B1ls"
  admin_username        = "azureuser"
  network_interface_ids = []
  os_disk {
    caching              = "ReadWrite"
    storage_account_type = "Standard_LRS"
    name                 = "auto-osdisk"
  }
  source_image_reference {
    publisher = "Canonical"
    offer     = "UbuntuServer"
    sku       = "18.04-LTS"
    version   = "latest"
  }
  disable_password_authentication = false
  admin_password = "ChangeMe1234!"
}"#,
        ),
    },
    CategorySpec {
        name: "App Service",
        config_pattern: Some(r"azurerm_app_service"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: App Service
resource "azurerm_app_service_plan" "auto_generated" {
  name                = "auto-appserviceplan"
  location            = "East US"
  resource_group_name = "auto-generated"
  sku {
    tier = "Basic"
    size = "B1"
  }
}
resource "azurerm_app_service" "auto_generated" {
  name                = "auto-appservice"
  location            = "East US"
  resource_group_name = "auto-generated"
  app_service_plan_id = azurerm_app_service_plan.auto_generated.id
}"#,
        ),
    },
    CategorySpec {
        name: "SQL Database",
        config_pattern: Some(r"azurerm_mssql_database|azurerm_sql_database"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: SQL Database
resource "azurerm_mssql_server" "auto_generated" {
  name                         = "auto-mssqlserver"
  resource_group_name          = "auto-generated"
  location                     = "East US"
  version                      = "12.0"
  administrator_login          = "sqladminuser"
  administrator_login_password = "ChangeMe1234!"
}
resource "azurerm_mssql_database" "auto_generated" {
  name           = "auto-database"
  server_id      = azurerm_mssql_server.auto_generated.id
  collation      = "SQL_Latin1_General_CP1_CI_AS"
  sku_name       = "S0"
}"#,
        ),
    },
    CategorySpec {
        name: "CosmosDB",
        config_pattern: Some(r"azurerm_cosmosdb_account"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: CosmosDB
resource "azurerm_cosmosdb_account" "auto_generated" {
  name                = "auto-cosmosdb"
  location            = "East US"
  resource_group_name = "auto-generated"
  offer_type          = "Standard"
  kind                = "GlobalDocumentDB"
  consistency_policy {
    consistency_level = "Session"
  }
  geo_location {
    location          = "East US"
    failover_priority = 0
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Storage Account",
        config_pattern: Some(r"azurerm_storage_account"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Storage Account
resource "azurerm_storage_account" "auto_generated" {
  name                     = "autostgacct${random_id.suffix.hex}"
  resource_group_name      = "auto-generated"
  location                 = "East US"
  account_tier             = "Standard"
  account_replication_type = "LRS"
  tags = {
    Environment = "auto"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Function App",
        config_pattern: Some(r"azurerm_function_app"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Function App
resource "azurerm_storage_account" "auto_generated_func" {
  name                     = "funcstgacct${random_id.suffix.hex}"
  resource_group_name      = "auto-generated"
  location                 = "East US"
  account_tier             = "Standard"
  account_replication_type = "LRS"
}
resource "azurerm_app_service_plan" "auto_generated_func" {
  name                = "auto-func-asp"
  location            = "East US"
  resource_group_name = "auto-generated"
  sku {
    tier = "Dynamic"
    size = "Y1"
  }
}
resource "azurerm_function_app" "auto_generated" {
  name                       = "auto-funcapp"
  location                   = "East US"
  resource_group_name        = "auto-generated"
  app_service_plan_id        = azurerm_app_service_plan.auto_generated_func.id
  storage_account_name       = azurerm_storage_account.auto_generated_func.name
  storage_account_access_key = azurerm_storage_account.auto_generated_func.primary_access_key
  version                    = "~4"
}"#,
        ),
    },
    CategorySpec {
        name: "Application Gateway",
        config_pattern: Some(r"azurerm_application_gateway"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Application Gateway
resource "azurerm_application_gateway" "auto_generated" {
  name                = "auto-appgw"
  resource_group_name = "auto-generated"
  location            = "East US"
  sku {
    name     = "Standard_Small"
    tier     = "Standard"
    capacity = 2
  }
  gateway_ip_configuration {
    name      = "auto-gwip"
    subnet_id = "auto-subnet-id" # Replace with the id of a real azurerm_subnet
  }
  frontend_port {
    name = "appGatewayFrontendPort"
    port = 80
  }
  frontend_ip_configuration {
    name                 = "appGatewayFrontendIP"
    public_ip_address_id = "auto-public-ip-id" # Replace with the id of a real azurerm_public_ip
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Load Balancer",
        config_pattern: Some(r"azurerm_lb"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Load Balancer
resource "azurerm_lb" "auto_generated" {
  name                = "auto-lb"
  location            = "East US"
  resource_group_name = "auto-generated"
  sku                 = "Standard"
  frontend_ip_configuration {
    name                 = "auto-frontend"
    public_ip_address_id = "auto-public-ip-id" # Replace with the id of a real azurerm_public_ip
  }
  tags = {
    Environment = "auto"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Key Vault",
        config_pattern: Some(r"azurerm_key_vault"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Key Vault
resource "azurerm_key_vault" "auto_generated" {
  name                     = "autokeyvault${random_id.suffix.hex}"
  location                 = "East US"
  resource_group_name      = "auto-generated"
  tenant_id                = "00000000-0000-0000-0000-000000000000" # Replace with the real tenant
  sku_name                 = "standard"
  soft_delete_enabled      = true
  purge_protection_enabled = false
  access_policy {
    tenant_id = "00000000-0000-0000-0000-000000000000"
    object_id = "00000000-0000-0000-0000-000000000000"
    key_permissions = [
      "get", "list"
    ]
    secret_permissions = [
      "get", "list"
    ]
  }
  tags = {
    Environment = "auto"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "DNS Zone",
        config_pattern: Some(r"azurerm_dns_zone"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: DNS Zone
resource "azurerm_dns_zone" "auto_generated" {
  name                = "auto.com"
  resource_group_name = "auto-generated"
}"#,
        ),
    },
    CategorySpec {
        name: "Public IP",
        config_pattern: Some(r"azurerm_public_ip"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Public IP
resource "azurerm_public_ip" "auto_generated" {
  name                = "auto-publicip"
  location            = "East US"
  resource_group_name = "auto-generated"
  allocation_method   = "Static"
  sku                 = "Standard"
}"#,
        ),
    },
    CategorySpec {
        name: "Network Interface",
        config_pattern: Some(r"azurerm_network_interface"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Network Interface
resource "azurerm_network_interface" "auto_generated" {
  name                = "auto-nic"
  location            = "East US"
  resource_group_name = "auto-generated"
  ip_configuration {
    name                          = "internal"
    subnet_id                     = "auto-subnet-id"
    private_ip_address_allocation = "Dynamic"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Log Analytics",
        config_pattern: Some(r"azurerm_log_analytics_workspace"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Log Analytics
resource "azurerm_log_analytics_workspace" "auto_generated" {
  name                = "auto-log"
  location            = "East US"
  resource_group_name = "auto-generated"
  sku                 = "PerGB2018"
  retention_in_days   = 30
}"#,
        ),
    },
    CategorySpec {
        name: "Event Hub",
        config_pattern: Some(r"azurerm_eventhub_namespace|azurerm_eventhub"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Event Hub
resource "azurerm_eventhub_namespace" "auto_generated" {
  name                = "auto-ehns"
  location            = "East US"
  resource_group_name = "auto-generated"
  sku                 = "Standard"
  capacity            = 1
}
resource "azurerm_eventhub" "auto_generated" {
  name                = "auto-eventhub"
  namespace_name      = azurerm_eventhub_namespace.auto_generated.name
  resource_group_name = "auto-generated"
  partition_count     = 2
  message_retention   = 1
}"#,
        ),
    },
    CategorySpec {
        name: "Service Bus",
        config_pattern: Some(r"azurerm_servicebus_namespace|azurerm_servicebus_queue"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Service Bus
resource "azurerm_servicebus_namespace" "auto_generated" {
  name                = "auto-sbns"
  location            = "East US"
  resource_group_name = "auto-generated"
  sku                 = "Standard"
}
resource "azurerm_servicebus_queue" "auto_generated" {
  name                = "auto-queue"
  resource_group_name = "auto-generated"
  namespace_name      = azurerm_servicebus_namespace.auto_generated.name
  enable_partitioning = true
}"#,
        ),
    },
    CategorySpec {
        name: "Firewall",
        config_pattern: Some(r"azurerm_firewall"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Firewall
resource "azurerm_firewall" "auto_generated" {
  name                = "auto-firewall"
  location            = "East US"
  resource_group_name = "auto-generated"
  sku_name            = "AZFW_VNet"
  sku_tier            = "Standard"
  ip_configuration {
    name                 = "configuration"
    subnet_id            = "auto-subnet-id"    # Replace with the id of a real azurerm_subnet
    public_ip_address_id = "auto-public-ip-id" # Replace with the id of a real azurerm_public_ip
  }
  tags = {
    Environment = "auto"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Container Registry",
        config_pattern: Some(r"azurerm_container_registry"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Container Registry
resource "azurerm_container_registry" "auto_generated" {
  name                = "autocontainerreg${random_id.suffix.hex}"
  resource_group_name = "auto-generated"
  location            = "East US"
  sku                 = "Basic"
  admin_enabled       = true
}"#,
        ),
    },
    CategorySpec {
        name: "Redis",
        config_pattern: Some(r"azurerm_redis_cache"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Redis
resource "azurerm_redis_cache" "auto_generated" {
  name                = "auto-redis"
  location            = "East US"
  resource_group_name = "auto-generated"
  capacity            = 1
  family              = "C"
  sku_name            = "Basic"
}"#,
        ),
    },
    CategorySpec {
        name: "VPN Gateway",
        config_pattern: Some(r"azurerm_vpn_gateway"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: VPN Gateway
resource "azurerm_vpn_gateway" "auto_generated" {
  name                = "auto-vpn"
  location            = "East US"
  resource_group_name = "auto-generated"
  virtual_hub_id      = "auto-virtual-hub-id" # Replace with a real id
}"#,
        ),
    },
    CategorySpec {
        name: "Bastion",
        config_pattern: Some(r"azurerm_bastion_host"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Bastion
resource "azurerm_bastion_host" "auto_generated" {
  name                = "auto-bastion"
  location            = "East US"
  resource_group_name = "auto-generated"
  ip_configuration {
    name                 = "configuration"
    subnet_id            = "auto-subnet-id"
    public_ip_address_id = "auto-public-ip-id"
  }
}"#,
        ),
    },
];
