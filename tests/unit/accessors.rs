//! Unit tests for the per-register get/set accessors

use crate::common::{MockTransport, Operation, create_mock_driver};
use ens210::{Ens210, Error, PART_ID_VALUE, Width, map};

#[test]
fn test_part_id_read() {
    let (mut driver, transport) = create_mock_driver();

    assert_eq!(driver.part_id().unwrap(), 0x0210);
    assert_eq!(
        transport.operations(),
        vec![Operation::Read {
            address: 0,
            primitive: Width::Bits16,
            width: Width::Bits16,
            value: 0x0210,
        }]
    );
}

#[test]
fn test_probe_accepts_ens210() {
    let transport = MockTransport::new();
    let mut driver = Ens210::probe(transport.clone()).unwrap();

    assert_eq!(driver.part_id().unwrap(), PART_ID_VALUE);
    // probe itself is a single PART_ID read
    assert_eq!(transport.read_count(), 2);
    assert_eq!(transport.write_count(), 0);
}

#[test]
fn test_probe_rejects_other_part() {
    let transport = MockTransport::new();
    transport.set_part_id(0x0211);

    let result = Ens210::probe(transport);
    assert!(matches!(result, Err(Error::InvalidPartId(0x0211))));
}

#[test]
fn test_new_does_not_touch_bus() {
    let transport = MockTransport::new();
    let _driver = Ens210::new(transport.clone());

    assert!(transport.operations().is_empty());
}

#[test]
fn test_round_trip_every_register() {
    let (mut driver, _transport) = create_mock_driver();

    driver.set_part_id(0xBEEF).unwrap();
    assert_eq!(driver.part_id().unwrap(), 0xBEEF);

    driver.set_uid(0x0123_4567_89AB_CDEF).unwrap();
    assert_eq!(driver.uid().unwrap(), 0x0123_4567_89AB_CDEF);

    driver.set_sys_ctrl(0x81).unwrap();
    assert_eq!(driver.sys_ctrl().unwrap(), 0x81);

    driver.set_sys_stat(0x00).unwrap();
    assert_eq!(driver.sys_stat().unwrap(), 0x00);

    driver.set_sens_run(0x03).unwrap();
    assert_eq!(driver.sens_run().unwrap(), 0x03);

    driver.set_sens_start(0x02).unwrap();
    assert_eq!(driver.sens_start().unwrap(), 0x02);

    driver.set_sens_stop(0x01).unwrap();
    assert_eq!(driver.sens_stop().unwrap(), 0x01);

    driver.set_sens_stat(0xFC).unwrap();
    assert_eq!(driver.sens_stat().unwrap(), 0xFC);

    driver.set_t_val(0x00AB_CDEF).unwrap();
    assert_eq!(driver.t_val().unwrap(), 0x00AB_CDEF);

    driver.set_h_val(0x0012_3456).unwrap();
    assert_eq!(driver.h_val().unwrap(), 0x0012_3456);
}

#[test]
fn test_round_trip_extremes() {
    let (mut driver, _transport) = create_mock_driver();

    for value in [0u8, 0x01, 0x7F, 0x80, 0xFF] {
        driver.set_sens_run(value).unwrap();
        assert_eq!(driver.sens_run().unwrap(), value);
    }

    for value in [0u32, 1, 0x00FF_FFFF] {
        driver.set_t_val(value).unwrap();
        assert_eq!(driver.t_val().unwrap(), value);
    }

    driver.set_uid(u64::MAX).unwrap();
    assert_eq!(driver.uid().unwrap(), u64::MAX);
}

#[test]
fn test_every_accessor_hits_its_address() {
    let (mut driver, transport) = create_mock_driver();

    driver.part_id().unwrap();
    driver.uid().unwrap();
    driver.sys_ctrl().unwrap();
    driver.sys_stat().unwrap();
    driver.sens_run().unwrap();
    driver.sens_start().unwrap();
    driver.sens_stop().unwrap();
    driver.sens_stat().unwrap();
    driver.t_val().unwrap();
    driver.h_val().unwrap();

    let addresses: Vec<u8> = transport.operations().iter().map(Operation::address).collect();
    let expected: Vec<u8> = map::REGISTERS.iter().map(|r| r.address).collect();
    assert_eq!(addresses, expected);
    assert_eq!(addresses, vec![0, 4, 16, 17, 33, 34, 35, 36, 48, 51]);
}

#[test]
fn test_reads_are_verbatim() {
    let (mut driver, transport) = create_mock_driver();

    // Reserved bits set on the device come back untouched
    transport.set_register(0x24, 0xFF, Width::Bits8);
    assert_eq!(driver.sens_stat().unwrap(), 0xFF);

    transport.set_register(0x11, 0xFE, Width::Bits8);
    assert_eq!(driver.sys_stat().unwrap(), 0xFE);
}

#[test]
fn test_power_on_values() {
    let (mut driver, _transport) = create_mock_driver();

    assert_eq!(
        u64::from(driver.sys_ctrl().unwrap()),
        map::SYS_CTRL.reset_value()
    );
    assert_eq!(
        u64::from(driver.sys_stat().unwrap()),
        map::SYS_STAT.reset_value()
    );
}

#[test]
fn test_release_returns_transport() {
    let (mut driver, _transport) = create_mock_driver();
    driver.set_sens_run(0x02).unwrap();

    let transport = driver.release();
    assert_eq!(transport.get_register(0x21, Width::Bits8), 0x02);
}

#[test]
fn test_transport_mut() {
    let (mut driver, transport) = create_mock_driver();

    driver
        .transport_mut()
        .set_register(0x21, 0x01, Width::Bits8);
    assert_eq!(driver.sens_run().unwrap(), 0x01);
    assert_eq!(transport.read_count(), 1);
}
