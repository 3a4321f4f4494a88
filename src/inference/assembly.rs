/// 识别逻辑的示意性 ARM Thumb-2 汇编，只用于界面展示，不会被执行
pub const CONCEPTUAL_ASSEMBLY: &str = r#"
; Gesture recognition, conceptual Cortex-M listing
; In:  R0 = X, R1 = Y, R2 = Z   (fixed point, g * 100)
; Out: R0 = gesture id          (0 unknown, 1 up, 2 down, 3 left, 4 right)

        MOVS  R3, #0            ; result = unknown
        MOVS  R4, #60           ; threshold 0.6
        MOVS  R8, #3            ; dominance 3/2
        MOVS  R9, #2

; |X| -> R6, |Y| -> R5, |Z| -> R7
        CMP   R0, #0
        ITE   LT
        RSBLT R6, R0, #0
        MOVGE R6, R0
        CMP   R1, #0
        ITE   LT
        RSBLT R5, R1, #0
        MOVGE R5, R1
        CMP   R2, #0
        ITE   LT
        RSBLT R7, R2, #0
        MOVGE R7, R2

; vertical: |Y| > 1.5|X|, |Y| > 1.5|Z|, |Y| > threshold
        MUL   R10, R6, R8
        UDIV  R10, R10, R9
        CMP   R5, R10
        BLE   horizontal
        MUL   R10, R7, R8
        UDIV  R10, R10, R9
        CMP   R5, R10
        BLE   horizontal
        CMP   R5, R4
        BLE   horizontal
        CMP   R1, #0
        ITE   GT
        MOVGT R3, #1            ; up
        MOVLE R3, #2            ; down
        B     done

horizontal:
; |X| > 1.5|Y|, |X| > 1.5|Z|, |X| > threshold
        MUL   R10, R5, R8
        UDIV  R10, R10, R9
        CMP   R6, R10
        BLE   done
        MUL   R10, R7, R8
        UDIV  R10, R10, R9
        CMP   R6, R10
        BLE   done
        CMP   R6, R4
        BLE   done
        CMP   R0, #0
        ITE   GT
        MOVGT R3, #4            ; right
        MOVLE R3, #3            ; left

done:
        MOV   R0, R3
        BX    LR
"#;
