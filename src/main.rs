#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

mod serial;

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use alarm_console::config::{
        CLOCK_PERIOD_US, DEFAULT_CODE, INITIAL_DATE_TIME, POLL_PERIOD_US, UART_BAUD_RATE,
        XTAL_FREQ_HZ,
    };
    use alarm_console::system::adc_to_celsius;
    use alarm_console::{HomeSystem, Session};
    use embedded_hal::adc::OneShot;
    use embedded_hal::digital::v2::{InputPin, OutputPin};
    use rp_pico::hal::{
        adc::{Adc, TempSense},
        clocks::{init_clocks_and_plls, Clock},
        fugit::{ExtU32, RateExtU32},
        gpio::{bank0::{Gpio14, Gpio25}, FunctionSio, FunctionUart, Pin, PullDown, PullUp, SioInput, SioOutput},
        sio::Sio,
        timer::{Alarm, Alarm0, Alarm1, Timer},
        uart::{DataBits, StopBits, UartConfig, UartPeripheral},
        watchdog::Watchdog,
    };

    use crate::serial::UartPort;

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        system: HomeSystem,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        session: Session,
        port: UartPort,
        adc: Adc,
        temp_sense: TempSense,
        gas_input: Pin<Gpio14, FunctionSio<SioInput>, PullUp>,
        siren_led: Pin<Gpio25, FunctionSio<SioOutput>, PullDown>,
        poll_alarm: Alarm0,
        clock_alarm: Alarm1,
        temperature_c: f32,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut poll_alarm = timer.alarm_0().unwrap();
        poll_alarm.schedule(POLL_PERIOD_US.micros()).unwrap();
        poll_alarm.enable_interrupt();

        let mut clock_alarm = timer.alarm_1().unwrap();
        clock_alarm.schedule(CLOCK_PERIOD_US.micros()).unwrap();
        clock_alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let siren_led = pins.led.into_push_pull_output();
        let gas_input = pins.gpio14.into_pull_up_input();

        let uart_pins = (
            pins.gpio0.into_function::<FunctionUart>(),
            pins.gpio1.into_function::<FunctionUart>(),
        );
        let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
            .enable(
                UartConfig::new(UART_BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
                clocks.peripheral_clock.freq(),
            )
            .unwrap();
        let mut port = UartPort::new(uart);

        let mut adc = Adc::new(pac.ADC, &mut pac.RESETS);
        let temp_sense = adc.take_temp_sensor().unwrap();

        let mut session = Session::new();
        session.init(&mut port);
        defmt::info!("console ready at {} baud", UART_BAUD_RATE);

        (
            Shared {
                system: HomeSystem::new(INITIAL_DATE_TIME, DEFAULT_CODE),
            },
            Local {
                session,
                port,
                adc,
                temp_sense,
                gas_input,
                siren_led,
                poll_alarm,
                clock_alarm,
                temperature_c: 0.0,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: system tick (100 Hz). Samples the detectors and serves
    // one console byte.
    #[task(
        binds = TIMER_IRQ_0,
        priority = 1,
        shared = [system],
        local = [poll_alarm, session, port, adc, temp_sense, gas_input, siren_led, temperature_c]
    )]
    fn system_tick(mut ctx: system_tick::Context) {
        ctx.local.poll_alarm.clear_interrupt();
        ctx.local.poll_alarm.schedule(POLL_PERIOD_US.micros()).ok();

        // Detector pulls the line low.
        let gas_detected = ctx.local.gas_input.is_low().unwrap_or(false);
        let reading: Option<u16> = ctx.local.adc.read(ctx.local.temp_sense).ok();
        if let Some(raw) = reading {
            *ctx.local.temperature_c = adc_to_celsius(raw);
        }
        let temperature_c = *ctx.local.temperature_c;

        let session = ctx.local.session;
        let port = ctx.local.port;
        let siren_on = ctx.shared.system.lock(|system| {
            system.update(session, port, gas_detected, temperature_c);
            system.alarm().is_active()
        });

        if siren_on {
            ctx.local.siren_led.set_high().ok();
        } else {
            ctx.local.siren_led.set_low().ok();
        }
    }

    // Hardware Task: Timer Interrupt (1Hz)
    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [system], local = [clock_alarm])]
    fn clock_tick(mut ctx: clock_tick::Context) {
        ctx.local.clock_alarm.clear_interrupt();
        ctx.local.clock_alarm.schedule(CLOCK_PERIOD_US.micros()).ok();

        ctx.shared.system.lock(|system| system.tick_second());
    }
}
