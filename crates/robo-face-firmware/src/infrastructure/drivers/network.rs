use embassy_executor::Spawner;
use embassy_net::{DhcpConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};

use crate::{config, infrastructure::tasks::network_runner_task, mk_static};

const MAX_CONNECTIONS: usize = 3;

/// Bring up a DHCPv4 stack on the radio and spawn its runner.
pub fn init_network_stack(spawner: Spawner, net_device: cyw43::NetDriver<'static>) -> Stack<'static> {
    let net_config = embassy_net::Config::dhcpv4(DhcpConfig::default());

    let network_resources = mk_static!(
        StackResources<MAX_CONNECTIONS>,
        StackResources::<MAX_CONNECTIONS>::new()
    );
    let (stack, runner) =
        embassy_net::new(net_device, net_config, network_resources, config::NETWORK.seed);
    spawner.spawn(network_runner_task(runner)).ok();

    stack
}

/// Wait for the network link to become active
async fn wait_for_link(stack: Stack<'_>) {
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}

/// Wait for the network stack to obtain an IPv4 address via DHCP
async fn wait_for_ip(stack: Stack<'_>) -> embassy_net::StaticConfigV4 {
    loop {
        if let Some(config) = stack.config_v4() {
            return config;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}

/// Wait for full network connectivity (link + IP address)
/// Returns the obtained IPv4 configuration
pub async fn wait_for_connection(stack: Stack<'_>) -> embassy_net::StaticConfigV4 {
    wait_for_link(stack).await;
    let ip = wait_for_ip(stack).await;
    log::info!("wifi: address {}", ip.address);
    ip
}
