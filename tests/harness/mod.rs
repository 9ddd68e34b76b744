#![allow(dead_code, unused_imports)]

pub(crate) mod fake_ansible;
pub(crate) mod test_context;

pub(crate) use fake_ansible::FakeAnsible;
pub(crate) use test_context::TestContext;

/// Inventory shaped like the demo deployment.
pub(crate) const DEMO_INVENTORY: &str = "\
all:
  children:
    alpamayo:
      hosts:
        demo-host-1:
          ansible_host: 10.0.0.1
        demo-host-2:
          ansible_host: 10.0.0.2
";

pub(crate) const HELLO_PLAYBOOK: &str = "\
- hosts: all
  gather_facts: false
  tasks:
    - debug:
        msg: hello
";
