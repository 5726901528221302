//! Reference tables for resource metadata.
//!
//! Pure constant data used when grouping resources for metric
//! collection. No request or trust logic lives here.

/// Pricing tier for an App Service plan SKU code.
pub fn server_farm_plan_tier(sku: &str) -> Option<&'static str> {
    let tier = match sku {
        "D1" => "Shared",
        "F1" => "Free",
        "B1" | "B2" | "B3" => "Basic",
        "S1" | "S2" | "S3" => "Standard",
        "P1" | "P2" | "P3" => "Premium",
        "P1V2" | "P2V2" | "P3V2" => "PremiumV2",
        "I1" | "I2" | "I3" => "Isolated",
        "Y1" => "Dynamic",
        _ => return None,
    };
    Some(tier)
}

/// Copy state codes reported for untyped cloud blob entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Invalid = 0,
    Pending = 1,
    Success = 2,
    Aborted = 3,
    Failed = 4,
}

impl CopyState {
    /// Map a raw state code to its variant.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CopyState::Invalid),
            1 => Some(CopyState::Pending),
            2 => Some(CopyState::Success),
            3 => Some(CopyState::Aborted),
            4 => Some(CopyState::Failed),
            _ => None,
        }
    }
}

/// Resource types with metrics support in the metrics API.
///
/// Checking support up front avoids pointless metric queries in large
/// environments.
pub const SUPPORTED_METRIC_RESOURCE_TYPES: &[&str] = &[
    "Microsoft.LocationBasedServices/accounts",
    "Microsoft.EventHub/namespaces",
    "Microsoft.EventHub/clusters",
    "Microsoft.Media/mediaservices/streamingEndpoints",
    "Microsoft.ServiceBus/namespaces",
    "Microsoft.KeyVault/vaults",
    "Microsoft.ClassicCompute/domainNames/slots/roles",
    "Microsoft.ClassicCompute/virtualMachines",
    "Microsoft.EventGrid/eventSubscriptions",
    "Microsoft.EventGrid/topics",
    "Microsoft.EventGrid/domains",
    "Microsoft.EventGrid/extensionTopics",
    "Microsoft.Network/virtualNetworks",
    "Microsoft.Network/publicIPAddresses",
    "Microsoft.Network/networkInterfaces",
    "Microsoft.Network/loadBalancers",
    "Microsoft.Network/networkWatchers/connectionMonitors",
    "Microsoft.Network/virtualNetworkGateways",
    "Microsoft.Network/connections",
    "Microsoft.Network/applicationGateways",
    "Microsoft.Network/dnszones",
    "Microsoft.Network/trafficmanagerprofiles",
    "Microsoft.Network/expressRouteCircuits",
    "Microsoft.Network/vpnGateways",
    "Microsoft.Network/p2sVpnGateways",
    "Microsoft.Network/expressRoutePorts",
    "Microsoft.Network/azureFirewalls",
    "Microsoft.Network/frontdoors",
    "Microsoft.Batch/batchAccounts",
    "Microsoft.TimeSeriesInsights/environments",
    "Microsoft.TimeSeriesInsights/environments/eventsources",
    "Microsoft.OperationalInsights/workspaces",
    "Microsoft.Maps/accounts",
    "Microsoft.Sql/servers",
    "Microsoft.Sql/servers/databases",
    "Microsoft.Sql/servers/elasticpools",
    "Microsoft.Sql/managedInstances",
    "Microsoft.DataBoxEdge/DataBoxEdgeDevices",
    "Microsoft.AnalysisServices/servers",
    "Microsoft.Compute/virtualMachines",
    "Microsoft.Compute/virtualMachineScaleSets",
    "Microsoft.Compute/virtualMachineScaleSets/virtualMachines",
    "Microsoft.DataFactory/dataFactories",
    "Microsoft.DataFactory/factories",
    "Microsoft.Storage/storageAccounts",
    "Microsoft.Storage/storageAccounts/blobServices",
    "Microsoft.Storage/storageAccounts/tableServices",
    "Microsoft.Storage/storageAccounts/queueServices",
    "Microsoft.Storage/storageAccounts/fileServices",
    "Microsoft.Logic/workflows",
    "Microsoft.Logic/integrationServiceEnvironments",
    "Microsoft.Automation/automationAccounts",
    "Microsoft.ContainerService/managedClusters",
    "Microsoft.StorageSync/storageSyncServices",
    "Microsoft.StorageSync/storageSyncServices/syncGroups",
    "Microsoft.StorageSync/storageSyncServices/syncGroups/serverEndpoints",
    "Microsoft.StorageSync/storageSyncServices/registeredServers",
    "Microsoft.ApiManagement/service",
    "Microsoft.DBforMySQL/servers",
    "Microsoft.DocumentDB/databaseAccounts",
    "Microsoft.ContainerRegistry/registries",
    "Microsoft.Search/searchServices",
    "Microsoft.insights/components",
    "Microsoft.insights/autoscalesettings",
    "Microsoft.DataLakeStore/accounts",
    "Microsoft.Web/serverFarms",
    "Microsoft.Web/sites",
    "Microsoft.Web/sites/slots",
    "Microsoft.Web/hostingEnvironments/multiRolePools",
    "Microsoft.Web/hostingEnvironments/workerPools",
    "Microsoft.HDInsight/clusters",
    "test.shoebox/testresources",
    "test.shoebox/testresources2",
    "Microsoft.NotificationHubs/namespaces/notificationHubs",
    "Microsoft.CustomerInsights/hubs",
    "CloudSimple.PrivateCloudIaaS/virtualMachines",
    "Microsoft.IoTSpaces/Graph",
    "Microsoft.StreamAnalytics/streamingjobs",
    "Microsoft.DBforMariaDB/servers",
    "Microsoft.CognitiveServices/accounts",
    "Microsoft.Cache/Redis",
    "Microsoft.Devices/IotHubs",
    "Microsoft.Devices/ElasticPools",
    "Microsoft.Devices/ElasticPools/IotHubTenants",
    "Microsoft.Devices/ProvisioningServices",
    "Microsoft.SignalRService/SignalR",
    "Microsoft.DataLakeAnalytics/accounts",
    "Microsoft.DBforPostgreSQL/servers",
    "Microsoft.ContainerInstance/containerGroups",
    "Microsoft.Kusto/clusters",
    "Microsoft.Relay/namespaces",
    "Microsoft.PowerBIDedicated/capacities",];

/// Whether the metrics API supports the given resource type.
pub fn is_metric_resource_supported(resource_type: &str) -> bool {
    SUPPORTED_METRIC_RESOURCE_TYPES.contains(&resource_type)
}
